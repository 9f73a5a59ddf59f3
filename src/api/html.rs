//! Server-rendered page
//!
//! One page holds the search box, the browse list, the selected movie and its
//! recommendation cards. Every control is a plain GET form back to `/`, so a
//! click on a card re-runs the same lookup with that title.

use crate::models::{or_not_available, MovieDetails, RecommendationCard};
use crate::services::PageView;

/// Shown for a card whose poster is missing or could not be fetched
pub const PLACEHOLDER_POSTER: &str = "https://placehold.co/300x445?text=No+Poster";

const NOT_IN_DATABASE: &str =
    "This movie may not be in the database, or you may have spelled it wrong.";
const NO_RECOMMENDATIONS: &str = "Could not find recommendations for this movie.";

/// Renders the full page for `view`
///
/// `titles` fills the browse list; `selected` is pre-selected in it.
pub fn render_page(view: &PageView, titles: &[String], selected: Option<&str>) -> String {
    let mut page = String::with_capacity(4096 + titles.len() * 48);

    page.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Movie Recommendation System</title>\n</head>\n<body>\n\
         <h1>Movie Recommendation System</h1>\n",
    );
    render_inputs(&mut page, titles, selected);

    match view {
        PageView::Empty => {}
        PageView::NotInDatabase { .. } => {
            page.push_str(&format!("<p class=\"error\">{}</p>\n", NOT_IN_DATABASE));
        }
        PageView::DetailsUnavailable {
            title,
            recommendations,
        } => {
            page.push_str(&format!(
                "<p class=\"error\">Could not fetch details for &#39;{}&#39;.</p>\n",
                escape(title)
            ));
            render_recommendations(&mut page, recommendations);
        }
        PageView::Movie {
            title,
            details,
            recommendations,
        } => {
            page.push_str("<h2>Your Searched Result</h2>\n");
            render_details(&mut page, title, details);
            render_recommendations(&mut page, recommendations);
        }
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn render_inputs(page: &mut String, titles: &[String], selected: Option<&str>) {
    page.push_str(
        "<form method=\"get\" action=\"/\">\n\
         <label>Search for a movie: <input type=\"text\" name=\"search\"></label>\n\
         <label>Or browse the database: <select name=\"select\">\n\
         <option value=\"\"></option>\n",
    );
    for title in titles {
        let marker = if selected == Some(title.as_str()) {
            " selected"
        } else {
            ""
        };
        page.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape(title),
            marker
        ));
    }
    page.push_str("</select></label>\n<button type=\"submit\">Show</button>\n</form>\n");
}

fn render_details(page: &mut String, title: &str, details: &MovieDetails) {
    page.push_str("<div class=\"details\">\n");
    match &details.poster {
        Some(poster) => {
            page.push_str(&format!(
                "<figure><img src=\"{}\" alt=\"{1}\"><figcaption>{1}</figcaption></figure>\n",
                escape(poster),
                escape(title)
            ));
        }
        None => page.push_str("<p>No Poster Available</p>\n"),
    }

    let fields = [
        ("Plot", details.plot.as_deref()),
        ("Genre", details.genre.as_deref()),
        ("Director", details.director.as_deref()),
        ("Cast", details.cast.as_deref()),
        ("Country", details.country.as_deref()),
        ("Rotten Tomatoes", details.rotten_tomatoes()),
        ("Metacritic", details.metacritic()),
    ];
    page.push_str("<dl>\n");
    for (label, value) in fields {
        page.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            label,
            escape(or_not_available(value))
        ));
    }
    page.push_str("</dl>\n</div>\n");
}

fn render_recommendations(page: &mut String, recommendations: &[RecommendationCard]) {
    page.push_str("<h2>You May Also Like</h2>\n");

    if recommendations.is_empty() {
        page.push_str(&format!("<p class=\"warning\">{}</p>\n", NO_RECOMMENDATIONS));
        return;
    }

    page.push_str("<div class=\"recommendations\">\n");
    for card in recommendations {
        let title = escape(&card.title);
        let poster = card.poster.as_deref().unwrap_or(PLACEHOLDER_POSTER);
        page.push_str(&format!(
            "<form class=\"card\" method=\"get\" action=\"/\">\
             <img src=\"{}\" alt=\"{1}\">\
             <input type=\"hidden\" name=\"pick\" value=\"{1}\">\
             <button type=\"submit\">{1}</button></form>\n",
            escape(poster),
            title
        ));
    }
    page.push_str("</div>\n");
}

/// Escapes text for use in element content and quoted attributes
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
