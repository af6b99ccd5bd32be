use super::*;
use crate::state::image_fallback::SlotPlaceholders;
use crate::types::{ImageRef, Publisher};

// =============================================================
// Helpers
// =============================================================

const THUMB_URL: &str = "https://res.cloudinary.com/demo/image/upload/v1/rust.jpg";
const AVATAR_URL: &str = "https://res.cloudinary.com/demo/image/upload/v1/lan.png";

fn make_course() -> Course {
    Course {
        id: "c-42".to_owned(),
        name: Some("Rust for Web Developers".to_owned()),
        description: Some("Ownership, lifetimes and WASM in practice.".to_owned()),
        price: Some(19.99),
        estimated_price: Some(49.0),
        is_free: false,
        rating: Some(4.66),
        purchased: Some(120),
        thumbnail: Some(ImageRef {
            url: Some(THUMB_URL.to_owned()),
        }),
        publisher: Some(Publisher {
            name: Some("Lan Nguyen".to_owned()),
            role: Some("Senior Instructor".to_owned()),
            avatar: Some(ImageRef {
                url: Some(AVATAR_URL.to_owned()),
            }),
        }),
    }
}

fn tripped() -> LoadLatch {
    let mut latch = LoadLatch::default();
    latch.trip();
    latch
}

// =============================================================
// Full record
// =============================================================

#[test]
fn view_renders_full_course() {
    let view = CourseCardView::new(&make_course(), &CardConfig::default());
    assert_eq!(view.href, "/courses/c-42");
    assert_eq!(view.publisher_name, "Lan Nguyen");
    assert_eq!(view.publisher_role, "Senior Instructor");
    assert_eq!(view.avatar.src(LoadLatch::default()), AVATAR_URL);
    assert_eq!(view.thumbnail.src(LoadLatch::default()), THUMB_URL);
    assert_eq!(view.title, "Rust for Web Developers");
    assert_eq!(view.description, "Ownership, lifetimes and WASM in practice.");
    assert_eq!(view.rating, "4.7");
    assert_eq!(view.reviews, "(120 reviews)");
    assert_eq!(view.estimated_price.as_deref(), Some("49 $"));
    assert_eq!(view.review_label.as_deref(), Some("200 Review rating"));
    assert_eq!(view.price, "19.99 $");
    assert_eq!(view.star_icon, "/assets/home/star.svg");
}

#[test]
fn view_uses_configured_currency() {
    let mut course = make_course();
    course.price = Some(199_000.6);
    course.estimated_price = Some(250_000.0);
    let view = CourseCardView::new(&course, &CardConfig::for_locale("vi-VN"));
    assert_eq!(view.price, "199001 VNĐ");
    assert_eq!(view.estimated_price.as_deref(), Some("250000 VNĐ"));
}

// =============================================================
// Missing fields
// =============================================================

#[test]
fn view_degrades_for_empty_course() {
    let course = Course {
        id: "c-1".to_owned(),
        ..Course::default()
    };
    let view = CourseCardView::new(&course, &CardConfig::default());
    assert_eq!(view.publisher_name, "");
    assert_eq!(view.publisher_role, DEFAULT_ROLE);
    assert_eq!(view.avatar.src(LoadLatch::default()), "/assets/images/teacher.jpg");
    assert_eq!(
        view.thumbnail.src(LoadLatch::default()),
        "/assets/images/placeholder-course.jpg"
    );
    assert_eq!(view.title, "");
    assert_eq!(view.rating, "0.0");
    assert_eq!(view.reviews, "(0 reviews)");
    assert_eq!(view.estimated_price, None);
    assert_eq!(view.price, "0 $");
}

#[test]
fn view_rejects_untrusted_image_hosts() {
    let mut course = make_course();
    course.thumbnail = Some(ImageRef {
        url: Some("https://evil.com/x.jpg".to_owned()),
    });
    let view = CourseCardView::new(&course, &CardConfig::default());
    assert_eq!(view.thumbnail.remote(), None);
    assert_eq!(
        view.thumbnail.src(LoadLatch::default()),
        "/assets/images/placeholder-course.jpg"
    );
    // The avatar slot is unaffected.
    assert_eq!(view.avatar.src(LoadLatch::default()), AVATAR_URL);
}

// =============================================================
// Load failures
// =============================================================

#[test]
fn failed_avatar_switches_to_failed_placeholder() {
    let view = CourseCardView::new(&make_course(), &CardConfig::default());
    assert_eq!(view.avatar.src(tripped()), "/assets/images/placeholder-teacher.jpg");
    assert_eq!(view.thumbnail.src(LoadLatch::default()), THUMB_URL);
}

#[test]
fn failed_thumbnail_switches_to_placeholder() {
    let view = CourseCardView::new(&make_course(), &CardConfig::default());
    assert_eq!(view.thumbnail.src(tripped()), "/assets/images/placeholder-course.jpg");
    assert_eq!(view.avatar.src(LoadLatch::default()), AVATAR_URL);
}

#[test]
fn unified_avatar_placeholders_are_configurable() {
    let mut config = CardConfig::default();
    config.placeholders.avatar = SlotPlaceholders::same("/assets/images/placeholder-teacher.jpg");
    let view = CourseCardView::new(&Course::default(), &config);
    assert_eq!(view.avatar.src(LoadLatch::default()), "/assets/images/placeholder-teacher.jpg");
    assert_eq!(view.avatar.src(tripped()), "/assets/images/placeholder-teacher.jpg");
}

#[test]
fn load_error_trips_signal_latch_once() {
    let owner = Owner::new();
    owner.with(|| {
        let view = CourseCardView::new(&make_course(), &CardConfig::default());
        let latch = RwSignal::new(LoadLatch::default());
        assert_eq!(view.avatar.src(latch.get_untracked()), AVATAR_URL);

        assert!(record_load_error(latch, ImageSlot::Avatar, "c-42"));
        assert_eq!(
            view.avatar.src(latch.get_untracked()),
            "/assets/images/placeholder-teacher.jpg"
        );

        assert!(!record_load_error(latch, ImageSlot::Avatar, "c-42"));
        assert!(latch.get_untracked().is_failed());
        assert_eq!(
            view.avatar.src(latch.get_untracked()),
            "/assets/images/placeholder-teacher.jpg"
        );
    });
}

#[test]
fn load_error_leaves_other_slot_untouched() {
    let owner = Owner::new();
    owner.with(|| {
        let view = CourseCardView::new(&make_course(), &CardConfig::default());
        let avatar = RwSignal::new(LoadLatch::default());
        let thumbnail = RwSignal::new(LoadLatch::default());

        record_load_error(thumbnail, ImageSlot::Thumbnail, "c-42");
        assert_eq!(
            view.thumbnail.src(thumbnail.get_untracked()),
            "/assets/images/placeholder-course.jpg"
        );
        assert_eq!(view.avatar.src(avatar.get_untracked()), AVATAR_URL);
    });
}

// =============================================================
// Price and labels
// =============================================================

#[test]
fn free_course_shows_free_label() {
    let mut course = make_course();
    course.is_free = true;
    course.price = Some(999.0);
    let view = CourseCardView::new(&course, &CardConfig::default());
    assert_eq!(view.price, "Free");
}

#[test]
fn review_label_can_be_hidden() {
    let mut config = CardConfig::default();
    config.review_label = None;
    let view = CourseCardView::new(&make_course(), &config);
    assert_eq!(view.review_label, None);
}

#[test]
fn empty_role_uses_default() {
    let mut course = make_course();
    if let Some(publisher) = course.publisher.as_mut() {
        publisher.role = Some(String::new());
    }
    let view = CourseCardView::new(&course, &CardConfig::default());
    assert_eq!(view.publisher_role, "Instructor");
}

#[test]
fn course_href_templates_the_id() {
    assert_eq!(course_href("abc123"), "/courses/abc123");
}
