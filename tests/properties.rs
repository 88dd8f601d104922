#![cfg(feature = "f64")]

use pigment::{
    Cmy, Cmyk, Color, Convert, Hsl, Hsv, Lab, Lch, LinearRgb, Luv, RgbEncoding, Space, Srgb,
    WhitePoint, Xyz, Yxy,
};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn srgb() -> impl Strategy<Value = Srgb> {
    (unit(), unit(), unit()).prop_map(|(r, g, b)| Srgb::new(r, g, b))
}

fn encoding() -> impl Strategy<Value = RgbEncoding> {
    prop_oneof![
        Just(RgbEncoding::Linear),
        Just(RgbEncoding::Srgb),
        Just(RgbEncoding::Gamma),
    ]
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

proptest! {
    #[test]
    fn hsl_through_hsv_matches_hsl_direct(rgb in srgb()) {
        let direct = rgb.to_hsl();
        let through = rgb.to_hsv().to_hsl();

        prop_assert!(hue_distance(direct.hue, through.hue) < 1e-6);
        prop_assert!((direct.saturation - through.saturation).abs() < 1e-6);
        prop_assert!((direct.lightness - through.lightness).abs() < 1e-6);
        prop_assert_eq!(direct.encoding, through.encoding);
    }

    #[test]
    fn srgb_survives_every_space(rgb in srgb()) {
        let color = Color::from(rgb);
        for space in Space::ALL {
            let back = color.to_space(space).to_srgb();
            prop_assert!((back.red - rgb.red).abs() < 1e-4, "{:?}: {:?} != {:?}", space, back, rgb);
            prop_assert!((back.green - rgb.green).abs() < 1e-4, "{:?}: {:?} != {:?}", space, back, rgb);
            prop_assert!((back.blue - rgb.blue).abs() < 1e-4, "{:?}: {:?} != {:?}", space, back, rgb);
        }
    }

    #[test]
    fn converting_to_the_same_model_is_identity(
        a in any::<f64>(),
        b in any::<f64>(),
        c in any::<f64>(),
        d in any::<f64>(),
        tag in encoding(),
    ) {
        let wp = WhitePoint::D65;

        let rgb = LinearRgb::new(a, b, c);
        prop_assert_eq!(rgb.to_linear_rgb(), rgb);
        let hsv = Hsv::new(a, b, c, tag);
        prop_assert_eq!(hsv.to_hsv(), hsv);
        let hsl = Hsl::new(a, b, c, tag);
        prop_assert_eq!(hsl.to_hsl(), hsl);
        let cmy = Cmy::new(a, b, c);
        prop_assert_eq!(cmy.to_cmy(), cmy);
        let cmyk = Cmyk::new(a, b, c, d);
        prop_assert_eq!(cmyk.to_cmyk(), cmyk);
        let xyz = Xyz::new(a, b, c, wp);
        prop_assert_eq!(xyz.to_xyz(), xyz);
        let yxy = Yxy::new(a, b, c, wp);
        prop_assert_eq!(yxy.to_yxy(), yxy);
        let lab = Lab::new(a, b, c, wp);
        prop_assert_eq!(lab.to_lab(), lab);
        let luv = Luv::new(a, b, c, wp);
        prop_assert_eq!(luv.to_luv(), luv);
        let lch = Lch::new(a, b, c, wp);
        prop_assert_eq!(lch.to_lch(), lch);
    }

    #[test]
    fn clamping_is_idempotent(
        a in any::<f64>(),
        b in any::<f64>(),
        c in any::<f64>(),
        d in any::<f64>(),
    ) {
        let wp = WhitePoint::D65;

        let rgb = Srgb::new(a, b, c);
        prop_assert_eq!(Srgb::new(rgb.red, rgb.green, rgb.blue), rgb);

        let hsv = Hsv::new(a, b, c, RgbEncoding::Srgb);
        prop_assert_eq!(Hsv::new(hsv.hue, hsv.saturation, hsv.value, hsv.encoding), hsv);
        prop_assert!((0.0..360.0).contains(&hsv.hue));

        let cmyk = Cmyk::new(a, b, c, d);
        prop_assert_eq!(Cmyk::new(cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.black), cmyk);

        let xyz = Xyz::new(a, b, c, wp);
        prop_assert_eq!(Xyz::new(xyz.x, xyz.y, xyz.z, wp), xyz);
        prop_assert!(xyz.x <= wp.x && xyz.y <= wp.y && xyz.z <= wp.z);

        let lab = Lab::new(a, b, c, wp);
        prop_assert_eq!(Lab::new(lab.lightness, lab.a, lab.b, wp), lab);

        let luv = Luv::new(a, b, c, wp);
        prop_assert_eq!(Luv::new(luv.lightness, luv.u, luv.v, wp), luv);

        let lch = Lch::new(a, b, c, wp);
        prop_assert_eq!(Lch::new(lch.lightness, lch.chroma, lch.hue, wp), lch);
        prop_assert!((0.0..360.0).contains(&lch.hue));
    }
}
