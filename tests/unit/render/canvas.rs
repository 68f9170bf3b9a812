use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> LayerImage {
    LayerImage {
        width,
        height,
        rgba8_premul: px.repeat(width as usize * height as usize),
    }
}

#[test]
fn avatar_canvas_is_400_square_and_transparent() {
    let canvas = Canvas::avatar();
    assert_eq!((canvas.width(), canvas.height()), (400, 400));
    assert!(canvas.as_premul_bytes().iter().all(|&b| b == 0));
}

#[test]
fn zero_sized_canvas_is_rejected() {
    assert!(Canvas::new(0, 4).is_err());
}

#[test]
fn oversized_canvas_is_an_error() {
    let err = Canvas::new(u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, AvatarError::Other(_)));
    assert!(err.to_string().contains("overflow"));
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let canvas = Canvas::new(2, 2).unwrap();
    assert!(canvas.pixel(1, 1).is_some());
    assert!(canvas.pixel(2, 0).is_none());
}

#[test]
fn smaller_layer_only_touches_overlap() {
    let mut canvas = Canvas::new(4, 4).unwrap();
    canvas.draw_over(&solid(2, 2, [0, 0, 255, 255])).unwrap();

    assert_eq!(canvas.pixel(1, 1), Some([0, 0, 255, 255]));
    assert_eq!(canvas.pixel(2, 0), Some([0, 0, 0, 0]));
    assert_eq!(canvas.pixel(0, 2), Some([0, 0, 0, 0]));
}

#[test]
fn larger_layer_is_clipped() {
    let mut canvas = Canvas::new(2, 2).unwrap();
    canvas.draw_over(&solid(5, 3, [9, 9, 9, 255])).unwrap();
    assert!(
        canvas
            .as_premul_bytes()
            .chunks_exact(4)
            .all(|px| px == [9, 9, 9, 255])
    );
}

#[test]
fn transparent_layer_lets_lower_layers_show() {
    let mut canvas = Canvas::new(1, 1).unwrap();
    canvas.draw_over(&solid(1, 1, [255, 0, 0, 255])).unwrap();
    canvas.draw_over(&solid(1, 1, [0, 0, 0, 0])).unwrap();
    assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0, 255]));
}

#[test]
fn rgba_export_is_straight_alpha() {
    let mut canvas = Canvas::new(1, 1).unwrap();
    canvas.draw_over(&solid(1, 1, [64, 0, 0, 128])).unwrap();
    let img = canvas.to_rgba_image();
    let px = img.get_pixel(0, 0).0;
    assert_eq!(px[3], 128);
    assert_eq!(px[0], 128);
}

#[test]
fn rgb_export_flattens_onto_black() {
    let mut canvas = Canvas::new(1, 1).unwrap();
    canvas.draw_over(&solid(1, 1, [64, 10, 0, 128])).unwrap();
    assert_eq!(canvas.to_rgb_image_over_black().get_pixel(0, 0).0, [64, 10, 0]);
}
