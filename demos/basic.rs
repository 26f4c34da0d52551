//! Basic example demonstrating the sfml bindings.
//!
//! Run with: cargo run --example basic

use sfml::{
    Angle, Clock, Color, ContextSettings, Module, RenderTexture, Sound, SoundBuffer, Time,
    Vector2f,
};

fn main() -> sfml::Result<()> {
    env_logger::init();

    // Value types need no native library.
    let offset = Vector2f::from_polar(10.0, Angle::degrees(90.0));
    println!("Polar offset: ({:.2}, {:.2})", offset.x, offset.y);
    println!(
        "370 degrees wraps to {:.1}",
        Angle::degrees(370.0).wrap_signed().as_degrees()
    );

    // Pick up CSFML_LIBRARY_DIR / CSFML_VERSION
    sfml::init(None)?;

    for module in [Module::System, Module::Graphics, Module::Audio] {
        println!(
            "{} available: {}",
            module.name(),
            sfml::is_module_available(module)
        );
    }

    if !sfml::is_module_available(Module::System) {
        println!("\nCSFML not found - skipping native part");
        return Ok(());
    }

    println!("\n--- Clock ---");
    let mut clock = Clock::new()?;
    sfml::sleep(Time::milliseconds(50))?;
    println!("Elapsed: {} ms", clock.restart().as_milliseconds());

    if sfml::is_module_available(Module::Graphics) {
        println!("\n--- Render texture ---");
        match RenderTexture::new(128, 128, &ContextSettings::default()) {
            Ok(mut target) => {
                target.clear(Color::CYAN);
                target.display();
                let size = target.texture().size();
                println!("Texture size: {}x{}", size.x, size.y);
                println!("Default view center: {:?}", target.default_view().center());
                target.dispose();
            }
            Err(e) => println!("Render texture unavailable: {}", e),
        }
    }

    if sfml::is_module_available(Module::Audio) {
        println!("\n--- Sound ---");
        let rate = 44_100u32;
        let samples: Vec<i16> = (0..rate)
            .map(|i| {
                let t = i as f32 / rate as f32;
                ((t * 440.0 * std::f32::consts::TAU).sin() * 8_000.0) as i16
            })
            .collect();
        let buffer = SoundBuffer::from_samples(&samples, 1, rate)?;
        println!("Buffer duration: {:.2} s", buffer.duration().as_seconds());

        let mut sound = Sound::with_buffer(&buffer)?;
        sound.set_volume(25.0);
        sound.play();
        sfml::sleep(Time::milliseconds(300))?;
        println!("Status: {:?}", sound.status());
        sound.stop();

        println!("Capture available: {}", sfml::is_capture_available());
    }

    println!("\nDone after {} ms", clock.elapsed_time().as_milliseconds());
    Ok(())
}
