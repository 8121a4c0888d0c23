//! Category colours

/// Colour for categories outside the table
pub const DEFAULT_MARKER_COLOR: &str = "#6b7280";

pub fn category_color(category: &str) -> &'static str {
    match category {
        "Street" => "#f97316",
        "Water" => "#3b82f6",
        "Electricity" => "#eab308",
        "Sanitation" => "#22c55e",
        "Garbage" => "#a16207",
        _ => DEFAULT_MARKER_COLOR,
    }
}
