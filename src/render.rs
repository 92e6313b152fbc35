use crate::model::{FilterOptions, Meal, RecipeDetail};
use crate::route::Route;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

pub const EMPTY_RESULTS: &str = "No meals found.";

/// Output format for rendered views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Html,
}

pub fn render_meals(meals: &[Meal], format: Format) -> String {
    match format {
        Format::Text => meals_to_text(meals),
        Format::Html => meals_to_html(meals),
    }
}

pub fn render_detail(detail: &RecipeDetail, format: Format) -> String {
    match format {
        Format::Text => detail_to_text(detail),
        Format::Html => detail_to_html(detail),
    }
}

fn meals_to_text(meals: &[Meal]) -> String {
    if meals.is_empty() {
        return EMPTY_RESULTS.to_string();
    }

    let width = meals.iter().map(|m| m.id.len()).max().unwrap_or(0);
    meals
        .iter()
        .map(|meal| format!("{:>width$}  {}", meal.id, meal.name, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn detail_to_text(detail: &RecipeDetail) -> String {
    let meal = &detail.meal;
    let mut out = String::new();

    out.push_str(&meal.name);
    out.push('\n');
    let origin: Vec<&str> = [meal.category.as_deref(), meal.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !origin.is_empty() {
        out.push_str(&origin.join(" / "));
        out.push('\n');
    }

    out.push_str("\nIngredients\n");
    for ingredient in &detail.ingredients {
        let _ = writeln!(out, "- {}", ingredient);
    }

    out.push_str("\nInstructions\n");
    for (number, step) in detail.instructions.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", number + 1, step);
    }

    if !detail.instructions.notes.is_empty() {
        out.push_str("\nNotes\n");
        out.push_str(&detail.instructions.notes.join("\n"));
        out.push('\n');
    }

    out
}

fn meals_to_html(meals: &[Meal]) -> String {
    if meals.is_empty() {
        return format!("<p class=\"empty-state\">{}</p>", EMPTY_RESULTS);
    }

    let mut out = String::new();
    for meal in meals {
        let href = Route::Meal(meal.id.clone()).to_hash();
        let _ = write!(
            out,
            "<a class=\"meal-card\" href=\"{}\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3></a>",
            encode_double_quoted_attribute(&href),
            encode_double_quoted_attribute(&meal.thumbnail),
            encode_double_quoted_attribute(&meal.name),
            encode_text(&meal.name),
        );
    }
    out
}

fn detail_to_html(detail: &RecipeDetail) -> String {
    let meal = &detail.meal;
    let mut out = String::new();

    out.push_str("<a class=\"close-btn\" href=\"#\">&larr; Back</a>");
    let _ = write!(
        out,
        "<h2>{}</h2><img src=\"{}\" alt=\"{}\">",
        encode_text(&meal.name),
        encode_double_quoted_attribute(&meal.thumbnail),
        encode_double_quoted_attribute(&meal.name),
    );

    out.push_str("<h3>Ingredients</h3><ul>");
    for ingredient in &detail.ingredients {
        let _ = write!(out, "<li>{}</li>", encode_text(&ingredient.to_string()));
    }
    out.push_str("</ul>");

    out.push_str("<h3>Instructions</h3><ol class=\"instructions\">");
    for step in &detail.instructions.steps {
        let _ = write!(out, "<li>{}</li>", encode_text(step));
    }
    out.push_str("</ol>");

    if !detail.instructions.notes.is_empty() {
        let notes: Vec<_> = detail
            .instructions
            .notes
            .iter()
            .map(|line| encode_text(line))
            .collect();
        let _ = write!(
            out,
            "<h3>Notes</h3><p class=\"notes\">{}</p>",
            notes.join("<br>")
        );
    }

    out
}

pub fn render_filter_options(options: &FilterOptions) -> String {
    [
        ("Categories", &options.categories),
        ("Areas", &options.areas),
        ("Ingredients", &options.ingredients),
    ]
    .iter()
    .map(|(title, values)| format!("{} ({}):\n  {}", title, values.len(), values.join(", ")))
    .collect::<Vec<_>>()
    .join("\n\n")
}
