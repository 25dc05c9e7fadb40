//! Static icon-set configuration. Adding a platform means editing this table.

#[derive(Debug)]
pub struct IconSet {
    pub name: &'static str,
    pub output_folder: &'static str,
    pub groups: &'static [AssetGroup],
}

#[derive(Debug)]
pub struct AssetGroup {
    pub name: &'static str,
    pub files: &'static [IconFile],
}

#[derive(Debug)]
pub struct IconFile {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

const fn file(name: &'static str, width: u32, height: u32) -> IconFile {
    IconFile {
        name,
        width,
        height,
    }
}

pub const UWP: IconSet = IconSet {
    name: "UWP",
    output_folder: "UWP",
    groups: &[AssetGroup {
        name: "Assets",
        files: &[
            file("LargeTile.scale-100.png", 310, 310),
            file("LargeTile.scale-200.png", 620, 620),
            file("LargeTile.scale-400.png", 1240, 1240),
            file("SmallTile.scale-100.png", 71, 71),
            file("SmallTile.scale-200.png", 142, 142),
            file("SmallTile.scale-400.png", 284, 284),
            file("SplashScreen.scale-100.png", 620, 300),
            file("SplashScreen.scale-200.png", 1240, 600),
            file("SplashScreen.scale-400.png", 2480, 1200),
            file("Square150x150Logo.scale-100.png", 150, 150),
            file("Square150x150Logo.scale-200.png", 300, 300),
            file("Square150x150Logo.scale-400.png", 600, 600),
            file("Square44x44Logo.altform-unplated_targetsize-16.png", 16, 16),
            file("Square44x44Logo.altform-unplated_targetsize-48.png", 48, 48),
            file("Square44x44Logo.altform-unplated_targetsize-256.png", 256, 256),
            file("Square44x44Logo.scale-100.png", 44, 44),
            file("Square44x44Logo.scale-200.png", 88, 88),
            file("Square44x44Logo.scale-400.png", 176, 176),
            file("Square44x44Logo.targetsize-16.png", 16, 16),
            file("Square44x44Logo.targetsize-48.png", 48, 48),
            file("Square44x44Logo.targetsize-256.png", 256, 256),
            file("StoreLogo.scale-100.png", 50, 50),
            file("StoreLogo.scale-200.png", 100, 100),
            file("StoreLogo.scale-400.png", 200, 200),
            file("Wide310x150Logo.scale-100.png", 310, 150),
            file("Wide310x150Logo.scale-200.png", 620, 300),
            file("Wide310x150Logo.scale-400.png", 1240, 600),
        ],
    }],
};

pub const IOS: IconSet = IconSet {
    name: "iOS",
    output_folder: "IOS",
    groups: &[
        AssetGroup {
            name: "Resources",
            files: &[
                file("Default.png", 320, 480),
                file("Default@2x.png", 640, 960),
                file("Default-568h@2x.png", 640, 1136),
                file("Default-Portrait.png", 768, 1004),
                file("Default-Portrait@2x.png", 1536, 2008),
                file("xamarin_logo.png", 220, 51),
                file("xamarin_logo@2x.png", 440, 101),
                file("xamarin_logo@3x.png", 880, 202),
            ],
        },
        AssetGroup {
            name: "Icons",
            files: &[
                file("Icon1024.png", 1024, 1024),
                file("Icon120.png", 120, 120),
                file("Icon152.png", 152, 152),
                file("Icon167.png", 167, 167),
                file("Icon180.png", 180, 180),
                file("Icon20.png", 20, 20),
                file("Icon29.png", 29, 29),
                file("Icon40.png", 40, 40),
                file("Icon58.png", 58, 58),
                file("Icon60.png", 60, 60),
                file("Icon76.png", 76, 76),
                file("Icon80.png", 80, 80),
                file("Icon87.png", 87, 87),
            ],
        },
    ],
};

pub const PLATFORMS: &[IconSet] = &[UWP, IOS];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        let count: usize = PLATFORMS
            .iter()
            .flat_map(|p| p.groups)
            .map(|g| g.files.len())
            .sum();
        assert_eq!(count, 48);
        assert_eq!(UWP.groups[0].files.len(), 27);
    }

    #[test]
    fn test_output_paths_are_unique() {
        let mut seen = HashSet::new();
        for platform in PLATFORMS {
            for group in platform.groups {
                for file in group.files {
                    assert!(
                        seen.insert((platform.output_folder, group.name, file.name)),
                        "duplicate entry {}/{}/{}",
                        platform.output_folder,
                        group.name,
                        file.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_all_dimensions_nonzero() {
        for platform in PLATFORMS {
            for group in platform.groups {
                for file in group.files {
                    assert!(file.width > 0 && file.height > 0, "{}", file.name);
                }
            }
        }
    }
}
