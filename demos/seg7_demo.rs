//! Paints a few frames into an LED buffer and prints them as ASCII art.
//!
//! Run with `cargo run --example seg7_demo`. On hardware, the print would be
//! replaced by writing `leds` to the strip driver.

use led_seg7::{BackgroundMode, LedBuffer, Rgb, Seg7Config, Seg7Display, Segment, colors};

const DIGIT_COUNT: u8 = 4;
const LED_COUNT: usize = DIGIT_COUNT as usize * Segment::COUNT;

fn main() {
    let mut leds = [Rgb::default(); LED_COUNT];
    let mut display = Seg7Display::from_config(
        &mut leds,
        Seg7Config::new()
            .with_digit_count(DIGIT_COUNT)
            .with_foreground(colors::ORANGE),
    );
    display
        .check_fits()
        .expect("buffer is sized for the display");

    display.show_number(-273, false);
    print_frame("show_number(-273)", &display);

    display.show_hex(0xBEEF, 0);
    print_frame("show_hex(0xBEEF)", &display);

    display.show_text("3.14");
    print_frame("show_text(\"3.14\")", &display);

    display.set_background_mode(BackgroundMode::Preserve);
    for step in 0..3 {
        display.spin_step(step, 0);
        print_frame(&format!("spin_step({step}) over the previous frame"), &display);
    }
}

fn print_frame<B: LedBuffer + ?Sized>(title: &str, display: &Seg7Display<'_, B>) {
    let patterns: Vec<u8> = (0..display.digit_count())
        .map(|position| display.segment_pattern(position).unwrap_or(0))
        .collect();
    let lit = |pattern: u8, segment: Segment, mark: char| {
        if segment.is_lit_in(pattern) { mark } else { ' ' }
    };

    println!("{title}");
    let rows: [Vec<String>; 3] = [
        patterns
            .iter()
            .map(|&bits| format!(" {}  ", lit(bits, Segment::A, '_')))
            .collect(),
        patterns
            .iter()
            .map(|&bits| {
                format!(
                    "{}{}{} ",
                    lit(bits, Segment::F, '|'),
                    lit(bits, Segment::G, '_'),
                    lit(bits, Segment::B, '|')
                )
            })
            .collect(),
        patterns
            .iter()
            .map(|&bits| {
                format!(
                    "{}{}{}{}",
                    lit(bits, Segment::E, '|'),
                    lit(bits, Segment::D, '_'),
                    lit(bits, Segment::C, '|'),
                    lit(bits, Segment::DecimalPoint, '.')
                )
            })
            .collect(),
    ];
    for row in rows {
        println!("  {}", row.concat());
    }
    println!();
}
