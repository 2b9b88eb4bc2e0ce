use pufferfish_color::{palette, pack_rgba32, Color};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPSILON: f32 = 1e-5;

fn close(a: Color, b: Color) -> bool {
    let (a, b): ([f32; 4], [f32; 4]) = (a.into(), b.into());
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= EPSILON)
}

fn random_color(rng: &mut StdRng) -> Color {
    Color::from_rgba(rng.gen(), rng.gen(), rng.gen(), rng.gen())
}

#[test]
fn from_packed_matches_from_bytes() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..1000 {
        let [r, g, b, a]: [u8; 4] = rng.gen();
        let packed = pack_rgba32(r, g, b, a);
        assert_eq!(Color::from_packed(packed), Color::from_bytes(r, g, b, a));
        assert_eq!(Color::from_bytes(r, g, b, a).to_bytes(), [r, g, b, a]);
    }
}

#[test]
fn lerp_hits_endpoints() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let a = random_color(&mut rng);
        let b = random_color(&mut rng);
        assert!(close(a.lerp(b, 0.), a));
        assert!(close(a.lerp(b, 1.), b));
        assert_eq!(a.lerp_precise(b, 0.), a);
        assert_eq!(a.lerp_precise(b, 1.), b);
    }
}

#[test]
fn out_of_range_amounts_are_clamped() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..1000 {
        let a = random_color(&mut rng);
        let b = random_color(&mut rng);
        let t: f32 = rng.gen_range(-10.0..10.0);
        let clamped = t.clamp(0., 1.);
        assert_eq!(a.lerp(b, t), a.lerp(b, clamped));
        assert_eq!(a.lerp_precise(b, t), a.lerp_precise(b, clamped));
    }
}

#[test]
fn lerp_variants_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let a = random_color(&mut rng);
        let b = random_color(&mut rng);
        for t in [0., 0.5, 1., rng.gen()] {
            assert!(close(a.lerp(b, t), a.lerp_precise(b, t)), "{a:?} {b:?} {t}");
        }
    }
}

#[test]
fn multiply_scales_without_clamping() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..1000 {
        let c = random_color(&mut rng);
        assert_eq!(c.multiply(1.), c);
        assert_eq!(c * 0., Color::from_rgba(0., 0., 0., 0.));
    }
    assert_eq!(Color::WHITE * 2., Color::from_rgba(2., 2., 2., 2.));
    assert_eq!(Color::WHITE.multiply(-1.), Color::from_rgba(-1., -1., -1., -1.));
}

#[test]
fn every_named_color_parses() {
    for named in palette::NAMED_COLORS {
        assert_eq!(named.name.parse::<Color>(), Ok(named.color));
        assert_eq!(named.display_name.parse::<Color>(), Ok(named.color));
        assert_eq!(format!("#{:08x}", named.rgba32).parse::<Color>(), Ok(named.color));
    }
}

#[test]
fn colors_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let t = f32::from(i) / 3.;
                Color::BLACK.lerp(Color::WHITE, t).to_packed()
            })
        })
        .collect();
    let packed: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(packed, [0x000000FF, 0x555555FF, 0xAAAAAAFF, 0xFFFFFFFF]);
}
