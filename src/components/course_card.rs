//! Course preview card for catalog listings.
//!
//! ARCHITECTURE
//! ============
//! `CourseCardView` derives every static string and image candidate from the
//! course record and config. The `CourseCard` component only adds the two
//! load latches and wires browser `error` events to them.

#[cfg(test)]
#[path = "course_card_test.rs"]
mod course_card_test;

use leptos::prelude::*;

use crate::config::{CardConfig, use_card_config};
use crate::state::image_fallback::{ImageSlot, ImageSource, LoadLatch};
use crate::types::Course;
use crate::util::price::{format_price, price_label};

/// Role shown when the publisher has none.
pub const DEFAULT_ROLE: &str = "Instructor";

/// Detail route for a course.
pub fn course_href(id: &str) -> String {
    format!("/courses/{id}")
}

/// Render-ready card content.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseCardView {
    pub href: String,
    pub publisher_name: String,
    pub publisher_role: String,
    pub avatar: ImageSource,
    pub thumbnail: ImageSource,
    pub title: String,
    pub description: String,
    /// Rating to one decimal place.
    pub rating: String,
    /// Review count derived from purchases, e.g. `"(12 reviews)"`.
    pub reviews: String,
    /// Struck-through list price, when the course has one.
    pub estimated_price: Option<String>,
    pub review_label: Option<String>,
    pub price: String,
    pub star_icon: String,
}

impl CourseCardView {
    pub fn new(course: &Course, config: &CardConfig) -> Self {
        let placeholders = &config.placeholders;
        Self {
            href: course_href(&course.id),
            publisher_name: course.publisher_name().unwrap_or_default().to_owned(),
            publisher_role: course.publisher_role().unwrap_or(DEFAULT_ROLE).to_owned(),
            avatar: ImageSource::resolve(
                course.avatar_url(),
                &config.image_policy,
                placeholders.avatar.clone(),
            ),
            thumbnail: ImageSource::resolve(
                course.thumbnail_url(),
                &config.image_policy,
                placeholders.thumbnail.clone(),
            ),
            title: course.name.clone().unwrap_or_default(),
            description: course.description.clone().unwrap_or_default(),
            rating: format!("{:.1}", course.rating.unwrap_or(0.0)),
            reviews: format!("({} reviews)", course.purchased.unwrap_or(0)),
            estimated_price: course
                .estimated_price
                .map(|price| format_price(price, config.currency)),
            review_label: config.review_label.clone(),
            price: price_label(course.is_free, course.price, config.currency),
            star_icon: placeholders.star_icon.clone(),
        }
    }
}

/// A clickable card previewing one course.
///
/// Reads [`CardConfig`] from context. Each image slot falls back to its
/// placeholder after the first load error and keeps it until the card is
/// remounted.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let config = use_card_config();
    if config.trace_image_urls {
        trace_image_urls(&course);
    }

    let card = CourseCardView::new(&course, &config);
    let thumbnail_alt = card.title.clone();
    let avatar_latch = RwSignal::new(LoadLatch::default());
    let thumbnail_latch = RwSignal::new(LoadLatch::default());

    let avatar_src = {
        let source = card.avatar.clone();
        move || source.src(avatar_latch.get())
    };
    let avatar_placeholder = {
        let source = card.avatar.clone();
        move || !source.is_remote(avatar_latch.get())
    };
    let thumbnail_src = {
        let source = card.thumbnail.clone();
        move || source.src(thumbnail_latch.get())
    };
    let thumbnail_placeholder = {
        let source = card.thumbnail.clone();
        move || !source.is_remote(thumbnail_latch.get())
    };

    let on_avatar_error = {
        let course_id = course.id.clone();
        move |_| {
            record_load_error(avatar_latch, ImageSlot::Avatar, &course_id);
        }
    };
    let on_thumbnail_error = {
        let course_id = course.id.clone();
        move |_| {
            record_load_error(thumbnail_latch, ImageSlot::Thumbnail, &course_id);
        }
    };

    view! {
        <a class="course-card" href=card.href>
            <div class="course-card__body">
                <div class="course-card__publisher">
                    <div class="course-card__avatar">
                        <img
                            class="course-card__avatar-img"
                            class:placeholder=avatar_placeholder
                            src=avatar_src
                            alt="Instructor"
                            width="32"
                            height="32"
                            on:error=on_avatar_error
                        />
                    </div>
                    <div class="course-card__publisher-text">
                        <p class="course-card__publisher-name">{card.publisher_name}</p>
                        <p class="course-card__publisher-role">{card.publisher_role}</p>
                    </div>
                </div>

                <div class="course-card__thumbnail">
                    <img
                        class="course-card__thumbnail-img"
                        class:placeholder=thumbnail_placeholder
                        src=thumbnail_src
                        alt=thumbnail_alt
                        loading="lazy"
                        on:error=on_thumbnail_error
                    />
                </div>

                <div class="course-card__text">
                    <h3 class="course-card__title">{card.title}</h3>
                    <p class="course-card__description">{card.description}</p>
                </div>

                <div class="course-card__footer">
                    <div class="course-card__row">
                        <div class="course-card__rating">
                            <img src=card.star_icon alt="Star" width="12" height="12"/>
                            <span>{card.rating}</span>
                            <span class="course-card__reviews">{card.reviews}</span>
                        </div>
                        <span class="course-card__estimated-price">
                            {card.estimated_price.unwrap_or_default()}
                        </span>
                    </div>
                    <div class="course-card__row">
                        <span class="course-card__review-label">{card.review_label}</span>
                        <span class="course-card__price">{card.price}</span>
                    </div>
                </div>
            </div>
        </a>
    }
}

/// Trip `latch` for a failed image load. Returns `true` on the first failure.
fn record_load_error(latch: RwSignal<LoadLatch>, slot: ImageSlot, course_id: &str) -> bool {
    let mut transitioned = false;
    latch.update(|l| transitioned = l.trip());
    if transitioned {
        leptos::logging::debug_warn!(
            "course {course_id}: {} image failed to load, showing placeholder",
            slot.label()
        );
    }
    transitioned
}

fn trace_image_urls(course: &Course) {
    leptos::logging::log!("thumbnail raw url: {:?}", course.thumbnail_url());
    leptos::logging::log!("avatar raw url: {:?}", course.avatar_url());
}
