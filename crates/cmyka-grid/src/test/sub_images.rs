use cmyka_color::{Cmyka, Rgba};

use crate::{CmykaImage, Image, ImageMut, Rectangle};

fn numbered(rect: Rectangle) -> CmykaImage {
    let mut image = CmykaImage::new(rect);
    for y in rect.min.y..rect.max.y {
        for x in rect.min.x..rect.max.x {
            image.set_cmyka(x, y, Cmyka::new(x as u8, y as u8, 0, 0, 0xff));
        }
    }
    image
}

#[test]
fn bounds_are_intersection() {
    let image = numbered(Rectangle::new(0, 0, 8, 8));
    for r in [
        Rectangle::new(2, 3, 5, 7),
        Rectangle::new(-4, -4, 3, 3),
        Rectangle::new(6, 6, 20, 20),
        Rectangle::new(0, 0, 8, 8),
    ] {
        let sub = image.sub_image(r);
        assert_eq!(sub.bounds(), r.intersect(image.bounds()));
    }
}

#[test]
fn shares_pixels() {
    let image = numbered(Rectangle::new(0, 0, 8, 8));
    let sub = image.sub_image(Rectangle::new(2, 3, 5, 7));
    assert_eq!(sub.stride(), image.stride());
    assert_eq!(sub.pix_offset(2, 3), 0);
    assert_eq!(sub.pix().len(), image.pix().len() - image.pix_offset(2, 3));
    assert!(std::ptr::eq(&sub.pix()[0], &image.pix()[image.pix_offset(2, 3)]));

    for y in 3..7 {
        for x in 2..5 {
            assert_eq!(sub.at(x, y), image.at(x, y));
        }
    }
    assert_eq!(sub.at(1, 3), Cmyka::default());
    assert_eq!(sub.at(5, 3), Cmyka::default());
}

#[test]
fn empty_intersection() {
    let image = numbered(Rectangle::new(0, 0, 8, 8));
    let sub = image.sub_image(Rectangle::new(10, 10, 12, 12));
    assert_eq!(sub.bounds(), Rectangle::empty());
    assert!(sub.pix().is_empty());
    assert_eq!(sub.at(10, 10), Cmyka::default());
    assert_eq!(sub.at(0, 0), Cmyka::default());

    let edge = image.sub_image(Rectangle::new(8, 0, 9, 8));
    assert!(edge.pix().is_empty());
}

#[test]
fn writes_through_mutable_view() {
    let mut image = numbered(Rectangle::new(0, 0, 8, 8));
    {
        let mut sub = image.sub_image_mut(Rectangle::new(4, 4, 6, 6));
        sub.set_cmyka(5, 5, Cmyka::new(1, 2, 3, 4, 5));
        sub.set(4, 4, Rgba::new(0xff, 0, 0, 0xff));
        // Outside of the view, even though it's inside the parent.
        sub.set_cmyka(3, 3, Cmyka::new(9, 9, 9, 9, 9));
    }
    assert_eq!(image.at(5, 5), Cmyka::new(1, 2, 3, 4, 5));
    assert_eq!(image.at(4, 4), Cmyka::new(0, 0xff, 0xff, 0, 0xff));
    assert_eq!(image.at(3, 3), Cmyka::new(3, 3, 0, 0, 0xff));
}

#[test]
fn empty_mutable_view_ignores_writes() {
    let mut image = numbered(Rectangle::new(0, 0, 4, 4));
    let before = image.pix().to_vec();
    {
        let mut sub = image.sub_image_mut(Rectangle::new(-5, -5, -1, -1));
        assert!(sub.pix().is_empty());
        sub.set_cmyka(0, 0, Cmyka::new(9, 9, 9, 9, 9));
        sub.set_cmyka(-2, -2, Cmyka::new(9, 9, 9, 9, 9));
    }
    assert_eq!(image.pix(), &before[..]);
}

#[test]
fn nested_views() {
    let mut image = numbered(Rectangle::new(-4, -4, 4, 4));
    {
        let mut outer = image.sub_image_mut(Rectangle::new(-2, -2, 3, 3));
        let mut inner = outer.sub_image_mut(Rectangle::new(1, 1, 10, 10));
        assert_eq!(inner.bounds(), Rectangle::new(1, 1, 3, 3));
        assert_eq!(inner.at(2, 1), Cmyka::new(2, 1, 0, 0, 0xff));
        inner.set_cmyka(2, 2, Cmyka::new(7, 7, 7, 7, 7));
    }
    assert_eq!(image.at(2, 2), Cmyka::new(7, 7, 7, 7, 7));

    let shared = image.sub_image(Rectangle::new(0, 0, 4, 4));
    let inner = shared.sub_image(Rectangle::new(2, 2, 3, 3));
    assert_eq!(inner.at(2, 2), Cmyka::new(7, 7, 7, 7, 7));
    assert_eq!(inner.pix().len(), image.pix().len() - image.pix_offset(2, 2));
}

#[test]
fn rows_of_view() {
    let image = numbered(Rectangle::new(0, 0, 4, 4));
    let sub = image.sub_image(Rectangle::new(1, 1, 3, 3));
    assert_eq!(sub.row(2).unwrap(), &[1, 2, 0, 0, 0xff, 2, 2, 0, 0, 0xff]);
    assert!(sub.row(0).is_none());
    assert!(sub.row(3).is_none());
}

#[test]
fn to_owned_image_packs() {
    let image = numbered(Rectangle::new(0, 0, 6, 6));
    let owned = image.sub_image(Rectangle::new(1, 2, 4, 5)).to_owned_image();
    assert_eq!(owned.bounds(), Rectangle::new(1, 2, 4, 5));
    assert_eq!(owned.stride(), 15);
    assert_eq!(owned.pix().len(), 45);
    for y in 2..5 {
        for x in 1..4 {
            assert_eq!(owned.at(x, y), image.at(x, y));
        }
    }

    let empty = image.sub_image(Rectangle::new(9, 9, 10, 10)).to_owned_image();
    assert!(empty.pix().is_empty());
}
