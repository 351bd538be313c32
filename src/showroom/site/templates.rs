//! Templates for the site primitives.
//!
//! Every template is HTML auto-escaped. Fragments rendered ahead of time
//! (markdown, nested primitives) are passed in as `*_html` fields and emitted
//! with `| safe`.

use super::theme::SITE_THEME;
use crate::error::Result;
use fragments::Renderer;

pub const HERO: &str = r#"<section class="{{ "hero" | classes }}">
  <h1 class="{{ "hero_title" | classes }}">{{ title }}</h1>
  <p class="{{ "hero_description" | classes }}">{{ description }}</p>
</section>
"#;

pub const FILTER_CHIPS: &str = r#"<div class="{{ "chips" | classes }}" role="group" aria-label="{{ label }}">
  <span class="{{ "chips_label" | classes }}">{{ label }}</span>
  <button type="button" data-category="" aria-pressed="{% if selected == "" %}true{% else %}false{% endif %}" class="{% if selected == "" %}{{ "chip_selected" | classes }}{% else %}{{ "chip" | classes }}{% endif %}">{{ all_label }}</button>
{%- for option in options %}
  <button type="button" data-category="{{ option }}" aria-pressed="{% if option == selected %}true{% else %}false{% endif %}" class="{% if option == selected %}{{ "chip_selected" | classes }}{% else %}{{ "chip" | classes }}{% endif %}">{{ option }}</button>
{%- endfor %}
</div>
"#;

pub const PAGINATION: &str = r#"<nav class="{{ "pagination" | classes }}" aria-label="Pagination">
  <button type="button" data-page="{{ previous }}" class="{{ "page_nav" | classes }}"{% if previous_disabled %} disabled{% endif %}>Previous</button>
{%- for page in pages %}
  <button type="button" data-page="{{ page }}" class="{% if page == current %}{{ "page_number_current" | classes }}{% else %}{{ "page_number" | classes }}{% endif %}"{% if page == current %} aria-current="page"{% endif %}>{{ page }}</button>
{%- endfor %}
  <button type="button" data-page="{{ next }}" class="{{ "page_nav" | classes }}"{% if next_disabled %} disabled{% endif %}>Next</button>
</nav>
"#;

pub const EMPTY_STATE: &str = r#"<section class="{{ "empty" | classes }}">
  <h2 class="{{ "empty_title" | classes }}">{{ title }}</h2>
  <p class="{{ "empty_text" | classes }}">{{ description }}</p>
  <a href="{{ cta_href }}" class="{{ "button" | classes }}">{{ cta_label }}</a>
</section>
"#;

pub const NOTICE: &str = r#"<div class="{{ "notice" | classes }}"><p>{{ message }}</p></div>
"#;

pub const DETAIL_MODAL: &str = r#"<div class="{{ "modal_backdrop" | classes }}" role="presentation">
  <div class="{{ "modal" | classes }} {{ max_width }}" role="dialog" aria-modal="true" aria-labelledby="{{ title_id }}">
    <div class="{{ "modal_header" | classes }}">
      <h2 id="{{ title_id }}" class="{{ "modal_title" | classes }}">{{ title }}</h2>
      <a href="{{ close_href }}" class="{{ "modal_close" | classes }}" aria-label="Close details">&times;</a>
    </div>
    <div class="{{ "modal_body" | classes }}">
{{ body_html | safe }}
    </div>
  </div>
</div>
"#;

pub const PRODUCT_CARDS: &str = r#"<div class="{{ "grid" | classes }}">
{%- for card in cards %}
  <article class="{{ "card" | classes }}" data-item-id="{{ card.id }}">
    {%- if card.image_url %}
    <img src="{{ card.image_url }}" alt="{{ card.name }}" class="{{ "card_image" | classes }}" loading="lazy" decoding="async">
    {%- endif %}
    <div class="{{ "card_body" | classes }}">
      <h3 class="{{ "card_title" | classes }}">{{ card.name }}</h3>
      <p class="{{ "card_text" | classes }}">{{ card.description }}</p>
      <a href="{{ card.detail_href }}" class="{{ "button" | classes }}">Learn More</a>
      <a href="{{ card.inquire_href }}" class="{{ "button_outline" | classes }}">Inquire</a>
    </div>
  </article>
{%- endfor %}
</div>
"#;

pub const PRODUCT_DETAIL: &str = r#"{% if image_url %}<img src="{{ image_url }}" alt="{{ name }}" class="{{ "card_image" | classes }}">
{% endif %}<div>
  <h3 class="{{ "section_title" | classes }}">Description</h3>
  <p>{{ description }}</p>
</div>
{%- if details_html %}
<div>
  <h3 class="{{ "section_title" | classes }}">Details</h3>
  <div class="{{ "markdown" | classes }}">{{ details_html | safe }}</div>
</div>
{%- endif %}
{%- if contact_info %}
<div class="{{ "contact_box" | classes }}">
  <h3 class="{{ "section_title" | classes }}">Contact Information</h3>
  <p>Email: <a href="mailto:{{ contact_info }}">{{ contact_info }}</a></p>
</div>
{%- endif %}
<div class="{{ "actions" | classes }}">
  <a href="{{ demo_href }}" class="{{ "button" | classes }}">Request Demo</a>
  <a href="{{ inquiry_href }}" class="{{ "button_outline" | classes }}">Send Inquiry</a>
</div>
"#;

pub const BLOG_CARDS: &str = r#"<div class="{{ "grid" | classes }}">
{%- for card in cards %}
  <article class="{{ "card" | classes }}" data-item-id="{{ card.id }}">
    {%- if card.image_url %}
    <div>
      <img src="{{ card.image_url }}" alt="{{ card.title }}" class="{{ "card_image" | classes }}" loading="lazy" decoding="async">
      {%- if card.category %}
      <span class="{{ "badge" | classes }}">{{ card.category }}</span>
      {%- endif %}
    </div>
    {%- endif %}
    <div class="{{ "card_body" | classes }}">
      <div class="{{ "card_meta" | classes }}">
        {%- if card.date %}<span>{{ card.date }}</span>{% endif %}
        {%- if card.read_time %}<span>{{ card.read_time }}</span>{% endif %}
      </div>
      <h3 class="{{ "card_title" | classes }}">{{ card.title }}</h3>
      <p class="{{ "card_text" | classes }}">{{ card.summary }}</p>
      {%- if card.author %}
      <div class="{{ "card_meta" | classes }}"><span class="{{ "avatar" | classes }}">{{ card.author_initial }}</span><span>{{ card.author }}</span></div>
      {%- endif %}
      <button type="button" data-item-id="{{ card.id }}" class="{{ "button" | classes }}">Read More</button>
    </div>
  </article>
{%- endfor %}
</div>
"#;

pub const BLOG_DETAIL: &str = r#"{% if image_url %}<img src="{{ image_url }}" alt="{{ title }}" class="{{ "card_image" | classes }}">
{% endif %}<div class="{{ "card_meta" | classes }}">
  {%- if author %}<span class="{{ "avatar" | classes }}">{{ author_initial }}</span><span>{{ author }}</span>{% endif %}
  {%- if date %}<span>{{ date }}</span>{% endif %}
  {%- if read_time %}<span>{{ read_time }}</span>{% endif %}
  {%- if category %}<span class="{{ "badge" | classes }}">{{ category }}</span>{% endif %}
</div>
<div class="{{ "markdown" | classes }}">{{ content_html | safe }}</div>
"#;

pub const CONTACT_RAIL: &str = r#"<aside class="{{ "contact_rail" | classes }}" aria-label="Quick contact actions">
{%- for action in actions %}
  <a href="{{ action.href }}" class="{{ "contact_item" | classes }}" data-mobile="{% if action.show_on_mobile %}true{% else %}false{% endif %}"{% if action.external %} target="_blank" rel="noopener noreferrer"{% endif %} aria-label="{{ action.label }}">
    <span>{{ action.label }}</span>
    {%- if action.detail %}<small>{{ action.detail }}</small>{% endif %}
  </a>
{%- endfor %}
</aside>
"#;

pub const LISTING_PAGE: &str = r#"<main class="{{ "page" | classes }}">
{{ hero_html | safe }}
{%- if empty_html %}
{{ empty_html | safe }}
{%- else %}
<div class="{{ "container" | classes }}">
{{ chips_html | safe }}
{{ notice_html | safe }}
{{ cards_html | safe }}
{{ pagination_html | safe }}
</div>
{%- endif %}
{{ modal_html | safe }}
</main>
"#;

pub const DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{{ head_html | safe }}</head>
<body>
{{ body_html | safe }}
{{ contact_html | safe }}
</body>
</html>
"#;

/// Every site template, by name.
pub const TEMPLATES: [(&str, &str); 13] = [
    ("hero", HERO),
    ("filter_chips", FILTER_CHIPS),
    ("pagination", PAGINATION),
    ("empty_state", EMPTY_STATE),
    ("notice", NOTICE),
    ("detail_modal", DETAIL_MODAL),
    ("product_cards", PRODUCT_CARDS),
    ("product_detail", PRODUCT_DETAIL),
    ("blog_cards", BLOG_CARDS),
    ("blog_detail", BLOG_DETAIL),
    ("contact_rail", CONTACT_RAIL),
    ("listing_page", LISTING_PAGE),
    ("document", DOCUMENT),
];

/// A renderer with every site template registered against [`SITE_THEME`].
pub fn site_renderer() -> Result<Renderer> {
    let mut renderer = Renderer::new(SITE_THEME.clone());
    for (name, source) in TEMPLATES {
        renderer.add_template(name, source)?;
    }
    Ok(renderer)
}
