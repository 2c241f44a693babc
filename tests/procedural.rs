use gl_chapters::procedural;

#[test]
fn generators_honor_the_size() {
    let generators: [fn(u32) -> image::RgbaImage; 8] = [
        procedural::brick,
        procedural::smiley,
        procedural::container_diffuse,
        procedural::container_specular,
        procedural::stone_tiles,
        procedural::wood_planks,
        procedural::grass,
        procedural::window_pane,
    ];

    for generate in generators {
        assert_eq!(generate(64).dimensions(), (64, 64));
        assert_eq!(generate(procedural::DEFAULT_SIZE).dimensions(), (256, 256));
    }
}

#[test]
fn generators_are_deterministic() {
    assert_eq!(procedural::brick(128), procedural::brick(128));
    assert_eq!(procedural::grass(128), procedural::grass(128));
    assert_eq!(procedural::stone_tiles(128), procedural::stone_tiles(128));
}

#[test]
fn smiley_has_a_transparent_background() {
    let image = procedural::smiley(256);
    assert_eq!(image.get_pixel(0, 0).0[3], 0);
    assert_eq!(image.get_pixel(255, 255).0[3], 0);
    assert_eq!(image.get_pixel(128, 128).0, [250, 205, 40, 255]);
}

#[test]
fn grass_is_cut_out() {
    let image = procedural::grass(256);
    assert!((0..256).all(|x| image.get_pixel(x, 0).0[3] == 0), "top row should be empty");
    assert!(image.pixels().any(|p| p.0[3] == 255));
    assert!(image.pixels().all(|p| p.0[3] == 0 || p.0[3] == 255));
}

#[test]
fn window_glass_is_translucent() {
    let image = procedural::window_pane(256);
    let glass = image.get_pixel(64, 64).0[3];
    assert!((100..=140).contains(&glass), "glass alpha {glass}");
    assert_eq!(image.get_pixel(0, 0).0[3], 255);
    assert_eq!(image.get_pixel(128, 128).0[3], 255);
}

#[test]
fn container_frame_is_shinier_than_the_wood() {
    let image = procedural::container_specular(256);
    assert!(image.get_pixel(2, 2).0[0] >= 170);
    assert_eq!(image.get_pixel(128, 128).0, [8, 8, 8, 255]);
}

#[test]
fn checkerboard_with_zero_cells_is_one_color() {
    let image = procedural::checkerboard(16, 0, [255, 0, 0, 255], [0, 0, 255, 255]);
    assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(15, 15).0, [255, 0, 0, 255]);
}
