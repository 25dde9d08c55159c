use circle_raster::{Circle, Pixel, Rasterize};

fn main() {
    let circle = Circle::new(Pixel(0, 0), 100).unwrap();
    let (min, max) = circle.bounding_box();
    let width = (max.0 - min.0 + 1) as u32;
    let height = (max.1 - min.1 + 1) as u32;

    let mut image_buf =
        image::RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255]));

    for pixel in circle.rasterize() {
        let ix = (pixel.0 - min.0) as u32;
        let iy = (pixel.1 - min.1) as u32;
        image_buf.put_pixel(ix, iy, image::Rgb([0, 0, 0]));
    }

    std::fs::create_dir_all("out").unwrap();
    image_buf.save("out/circle.png").unwrap();
}
