use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::debug;

use crate::cli::RunConfig;
use crate::color::Argb;
use crate::platforms::{IconFile, PLATFORMS};

/// Run the full batch: prepare the output directory, load the source image
/// and render every configured platform asset.
pub fn run(config: &RunConfig) -> Result<()> {
    prepare_output(&config.output_dir, config.force)?;
    let source = image::open(&config.source)
        .with_context(|| format!("failed to open source image {}", config.source.display()))?
        .to_rgba8();
    render_all(&source, config)
}

/// Create the output directory. An existing directory is an error unless
/// `force` is set, in which case it is deleted first.
pub fn prepare_output(path: &Path, force: bool) -> Result<()> {
    if path.exists() {
        if !force {
            bail!(
                "output directory {} already exists (pass --force to replace it)",
                path.display()
            );
        }
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove {}", path.display()))?;
    }
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create output directory {}", path.display()))?;
    Ok(())
}

/// Render every (platform, group, file) entry of the configuration table.
pub fn render_all(source: &RgbaImage, config: &RunConfig) -> Result<()> {
    for platform in PLATFORMS {
        let platform_dir = config.output_dir.join(platform.output_folder);
        fs::create_dir(&platform_dir)
            .with_context(|| format!("failed to create {}", platform_dir.display()))?;
        for group in platform.groups {
            let group_dir = platform_dir.join(group.name);
            fs::create_dir(&group_dir)
                .with_context(|| format!("failed to create {}", group_dir.display()))?;
            for file in group.files {
                let out_path = group_dir.join(file.name);
                let icon = render_icon(source, file, config.background);
                icon.save(&out_path)
                    .with_context(|| format!("failed to save {}", out_path.display()))?;
                debug!(
                    "wrote {} ({}x{})",
                    out_path.display(),
                    file.width,
                    file.height
                );
            }
        }
    }
    Ok(())
}

/// Scale the source to fit one target box, center it on a canvas filled with
/// the background color and composite.
fn render_icon(source: &RgbaImage, file: &IconFile, background: Argb) -> RgbaImage {
    let (scaled_w, scaled_h) =
        fit_within(source.width(), source.height(), file.width, file.height);
    let resized = imageops::resize(source, scaled_w, scaled_h, FilterType::Lanczos3);

    let [r, g, b] = background.rgb;
    let mut canvas =
        RgbaImage::from_pixel(file.width, file.height, Rgba([r, g, b, background.alpha]));

    let hpad = (file.width - scaled_w) / 2;
    let vpad = (file.height - scaled_h) / 2;
    imageops::overlay(&mut canvas, &resized, i64::from(hpad), i64::from(vpad));
    canvas
}

/// Fit-within-box scaling: scale to the target width first, then shrink
/// further if the height overflows. The two-step order and the truncation at
/// each step are deliberate; asset pipelines depend on the exact centering
/// this produces.
pub fn fit_within(src_w: u32, src_h: u32, out_w: u32, out_h: u32) -> (u32, u32) {
    let scale = f64::from(out_w) / f64::from(src_w);
    let mut scaled_w = (f64::from(src_w) * scale) as u32;
    let mut scaled_h = (f64::from(src_h) * scale) as u32;
    if scaled_h > out_h {
        let rescale = f64::from(out_h) / f64::from(scaled_h);
        scaled_h = (f64::from(scaled_h) * rescale) as u32;
        scaled_w = (f64::from(scaled_w) * rescale) as u32;
    }
    (scaled_w, scaled_h)
}
