use leptos::{
    prelude::*,
    svg::{path, svg},
};

/// Triangle warning glyph shown above error messages.
pub fn warning() -> impl IntoView {
    svg()
        .attr("width", "2.5em")
        .attr("height", "2.5em")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "currentColor")
        .attr("role", "graphics-symbol")
        .attr("aria-hidden", "true")
        .attr("class", "text-red-500")
        .child(path().attr(
            "d",
            "M12 2 1 21h22L12 2zm0 4.5L19.5 19h-15L12 6.5zM11 10v4h2v-4h-2zm0 6v2h2v-2h-2z",
        ))
}
