use colored::Colorize;
use showroom::api::{CmdMessage, ListingPage, MessageLevel, RouteLine};
use showroom::config::SiteConfig;
use showroom::format::{format_date, read_time_label};
use showroom::meta::ResolvedMeta;
use showroom::model::ContentItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 8;
const CATEGORY_WIDTH: usize = 20;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_listing(listing: &ListingPage) {
    let filter = if listing.selected_category.is_empty() {
        "all categories".to_string()
    } else {
        format!("category `{}`", listing.selected_category)
    };
    println!(
        "{} {}",
        listing.kind.to_string().bold(),
        format!(
            "page {} of {} ({} items, {})",
            listing.current_page,
            listing.total_pages.max(1),
            listing.filtered_count,
            filter
        )
        .dimmed()
    );
    if listing.items.is_empty() {
        return;
    }
    println!();

    let title_width = LINE_WIDTH.saturating_sub(ID_WIDTH + CATEGORY_WIDTH + 2);
    for item in &listing.items {
        let id = pad_to_width(&truncate_to_width(item.id.as_str(), ID_WIDTH), ID_WIDTH);
        let title = pad_to_width(&truncate_to_width(&item.title, title_width), title_width);
        let category = truncate_to_width(item.category.as_deref().unwrap_or("-"), CATEGORY_WIDTH);
        println!("{} {} {}", id.yellow(), title, category.dimmed());
    }
}

pub(super) fn print_categories(categories: &[String]) {
    if categories.is_empty() {
        println!("No categories.");
        return;
    }
    for category in categories {
        println!("{}", category);
    }
}

pub(super) fn print_item(item: &ContentItem) {
    println!("{} {}", item.id.to_string().yellow(), item.title.bold());
    println!("--------------------------------");

    let mut fields: Vec<(&str, String)> = Vec::new();
    if let Some(category) = &item.category {
        fields.push(("category", category.clone()));
    }
    if let Some(author) = &item.author {
        fields.push(("author", author.clone()));
    }
    if let Some(date) = &item.published_date {
        fields.push(("published", format_date(date)));
    }
    if let Some(minutes) = item.read_time {
        fields.push(("read time", read_time_label(minutes)));
    }
    if let Some(contact) = &item.contact_info {
        fields.push(("contact", contact.clone()));
    }
    if let Some(image) = &item.image_url {
        fields.push(("image", image.clone()));
    }
    for (label, value) in fields {
        println!("{:>10}  {}", label.dimmed(), value);
    }

    for text in [&item.excerpt, &item.description, &item.details, &item.content]
        .into_iter()
        .flatten()
    {
        println!();
        println!("{}", text);
    }
}

pub(super) fn print_meta(meta: &ResolvedMeta) {
    let rows = [
        ("title", meta.title.as_str()),
        ("description", meta.description.as_str()),
        ("type", meta.content_type.as_str()),
        ("robots", meta.robots),
        ("canonical", meta.canonical_url.as_str()),
        ("url", meta.page_url.as_str()),
        ("image", meta.image_url.as_str()),
        ("site", meta.site_name.as_str()),
    ];
    for (label, value) in rows {
        println!("{:>12}  {}", label.dimmed(), value);
    }
}

pub(super) fn print_routes(routes: &[RouteLine]) {
    let matcher_width = routes.iter().map(|r| r.matcher.width()).max().unwrap_or(0);
    for route in routes {
        let robots = if route.indexable {
            "index".green()
        } else {
            "noindex".red()
        };
        println!(
            "{}  {}  {}",
            pad_to_width(&route.matcher, matcher_width).yellow(),
            robots,
            route.title
        );
    }
}

pub(super) fn print_config(config: &SiteConfig) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Warning: could not format config: {}", e),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
