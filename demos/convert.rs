//! Print a color in every supported model.

use pigment::{Color, Convert, Space, Srgb};

fn main() {
    // chocolate
    let color = Color::from(Srgb::new(0.823529, 0.411765, 0.117647));

    for space in Space::ALL {
        println!("{:?}", color.to_space(space));
    }

    let lab = color.to_lab();
    println!(
        "L*a*b* {:.2} {:.2} {:.2} back to {:?}",
        lab.lightness,
        lab.a,
        lab.b,
        lab.to_srgb()
    );
}
