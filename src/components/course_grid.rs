//! Keyed grid of course cards.

#[cfg(test)]
#[path = "course_grid_test.rs"]
mod course_grid_test;

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::types::Course;

/// Identity of a course within the grid.
pub fn course_key(course: &Course) -> String {
    course.id.clone()
}

/// Renders one [`CourseCard`] per course.
///
/// Cards are keyed by course id, so a card whose course is replaced by a
/// different one is remounted and its image latches start clear again.
#[component]
pub fn CourseGrid(#[prop(into)] courses: Signal<Vec<Course>>) -> impl IntoView {
    view! {
        <div class="course-grid">
            <For
                each=move || courses.get()
                key=course_key
                children=move |course: Course| view! { <CourseCard course=course/> }
            />
        </div>
    }
}
