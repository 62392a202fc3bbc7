use ratatui::style::Color;

/// Letter colors for the idle-screen wordmark.
pub const WORDMARK_PALETTE: [Color; 4] = [Color::Blue, Color::Red, Color::Yellow, Color::Green];

/// Badge color for a document category.
pub fn category_color(category: &str) -> Color {
    match category.to_lowercase().as_str() {
        "technology" | "tech" | "sci/tech" => Color::Cyan,
        "science" => Color::Green,
        "business" => Color::Blue,
        "sports" | "sport" => Color::Yellow,
        "health" => Color::Magenta,
        "entertainment" => Color::LightMagenta,
        "politics" | "world" => Color::Red,
        "education" => Color::LightBlue,
        _ => Color::Gray,
    }
}

/// Fill color for the relevance bar at a given percentage.
pub fn score_color(percent: f64) -> Color {
    if percent >= 75.0 {
        Color::Green
    } else if percent >= 40.0 {
        Color::Yellow
    } else if percent > 0.0 {
        Color::LightRed
    } else {
        Color::DarkGray
    }
}
