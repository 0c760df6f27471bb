use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Convert a PNG image to a raw RGB888 buffer at build time
fn convert_image_to_rgb(
    input_path: &str,
    output_path: &str,
    target_width: u32,
    target_height: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", input_path);

    // Check if input file exists
    if !Path::new(input_path).exists() {
        // Create empty file so build doesn't fail
        let mut file = File::create(output_path)?;
        file.write_all(&[])?;
        return Ok(());
    }

    println!("cargo:warning=Converting image: {}", input_path);

    let img = image::open(input_path)?;

    // Letterbox into the target while keeping the aspect ratio
    let resized = img
        .resize(
            target_width,
            target_height,
            image::imageops::FilterType::Lanczos3,
        )
        .to_rgb8();

    let offset_x = (target_width - resized.width()) / 2;
    let offset_y = (target_height - resized.height()) / 2;

    let mut canvas = image::RgbImage::new(target_width, target_height);
    image::imageops::overlay(
        &mut canvas,
        &resized,
        i64::from(offset_x),
        i64::from(offset_y),
    );

    let buffer = canvas.into_raw();
    println!(
        "cargo:warning=Image conversion complete. Buffer size: {} bytes",
        buffer.len()
    );

    let mut file = File::create(output_path)?;
    file.write_all(&buffer)?;
    Ok(())
}

fn main() {
    // ESP-IDF link arguments are only meaningful when building for the chip
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    // Visible area of the demo: 160x128 (128x160 panel rotated 90 degrees)
    let splash_output = format!("{}/splash.rgb", out_dir);

    if let Err(e) = convert_image_to_rgb("splash.png", &splash_output, 160, 128) {
        println!("cargo:warning=Failed to convert splash.png: {}", e);
        // The demo treats an empty blob as "no splash"
        if let Err(e) = File::create(&splash_output) {
            println!("cargo:warning=Could not write {}: {}", splash_output, e);
        }
    }

    println!("cargo:rerun-if-changed=splash.png");
}
