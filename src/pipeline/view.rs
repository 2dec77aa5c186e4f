//! View - component tree to styled lines.
//!
//! `render_app` is a pure function of the component state. Called inside a
//! derived it re-runs whenever any signal it read changes, which is what the
//! mount pipeline relies on.
//!
//! Spans can carry a [`HitTarget`]; the frame turns those into hit regions
//! so mouse events can be mapped back to component operations.

use crate::components::{App, Product, ReviewForm, ReviewTabs, Tab, NO_REVIEWS_MESSAGE};
use crate::review::{Rating, Recommendation};
use crate::state::focus::{FocusState, FormControl};
use crate::types::{Attr, Rgba, Style};

// =============================================================================
// Frame types
// =============================================================================

/// What a region of the screen does when pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Colour swatch; hovering selects the variant.
    Swatch(usize),
    AddToCart,
    RemoveFromCart,
    Tab(Tab),
    Control(FormControl),
    Recommend(Recommendation),
    Rating(Rating),
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
    pub target: Option<HitTarget>,
}

/// One screen row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// Plain text of the row.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Columns the row occupies.
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    /// The row cut to at most `width` columns.
    pub fn clipped(&self, width: u16) -> Line {
        let mut remaining = width as usize;
        let mut spans = Vec::with_capacity(self.spans.len());
        for span in &self.spans {
            if remaining == 0 {
                break;
            }
            let len = span.text.chars().count();
            if len <= remaining {
                spans.push(span.clone());
                remaining -= len;
            } else {
                spans.push(Span {
                    text: span.text.chars().take(remaining).collect(),
                    ..span.clone()
                });
                remaining = 0;
            }
        }
        Line { spans }
    }
}

/// Rectangle (one row high) that maps to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub target: HitTarget,
}

/// A full paint: rows plus their hit regions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    /// Hit regions derived from span positions.
    pub fn hit_regions(&self) -> Vec<HitRegion> {
        let mut regions = Vec::new();
        for (y, line) in self.lines.iter().enumerate() {
            let mut x = 0usize;
            for span in &line.spans {
                let width = span.text.chars().count();
                if let Some(target) = span.target {
                    regions.push(HitRegion {
                        x: x as u16,
                        y: y as u16,
                        width: width as u16,
                        target,
                    });
                }
                x += width;
            }
        }
        regions
    }

    /// Target under a cell, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hit_regions()
            .into_iter()
            .find(|r| r.y == y && x >= r.x && x < r.x + r.width)
            .map(|r| r.target)
    }

    /// Rows as plain text, newline separated.
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The frame as a terminal `width` columns wide shows it.
    ///
    /// Rows never wrap, and hit regions stop at the right edge.
    pub fn clipped(&self, width: u16) -> Frame {
        Frame {
            lines: self.lines.iter().map(|l| l.clipped(width)).collect(),
        }
    }

    /// First row whose text contains `needle`.
    pub fn find_line(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.text().contains(needle))
    }
}

// =============================================================================
// Line builder
// =============================================================================

struct LineBuilder {
    spans: Vec<Span>,
}

impl LineBuilder {
    fn new() -> Self {
        Self { spans: Vec::new() }
    }

    fn text(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span {
            text: text.into(),
            style: Style::plain(),
            target: None,
        });
        self
    }

    fn styled(mut self, text: impl Into<String>, style: Style) -> Self {
        self.spans.push(Span {
            text: text.into(),
            style,
            target: None,
        });
        self
    }

    fn target(mut self, text: impl Into<String>, style: Style, target: HitTarget) -> Self {
        self.spans.push(Span {
            text: text.into(),
            style,
            target: Some(target),
        });
        self
    }

    fn build(self) -> Line {
        Line { spans: self.spans }
    }
}

fn blank() -> Line {
    Line::default()
}

fn heading() -> Style {
    Style::plain().attrs(Attr::BOLD)
}

fn muted() -> Style {
    Style::plain().fg(Rgba::GRAY)
}

fn error() -> Style {
    Style::plain().fg(Rgba::RED)
}

fn button(enabled: bool) -> Style {
    if enabled {
        Style::plain().fg(Rgba::BLACK).bg(Rgba::ACCENT).attrs(Attr::BOLD)
    } else {
        Style::plain().fg(Rgba::GRAY).attrs(Attr::DIM)
    }
}

fn focused(style: Style, is_focused: bool) -> Style {
    if is_focused { style.attrs(Attr::INVERSE) } else { style }
}

// =============================================================================
// Components
// =============================================================================

/// Render the whole tree.
pub fn render_app(app: &App, focus: &FocusState) -> Frame {
    let mut lines = Vec::new();

    lines.push(
        LineBuilder::new()
            .styled(" spark storefront", muted())
            .text("   ")
            .styled(format!("Cart ({})", app.cart_count()), heading())
            .build(),
    );
    lines.push(blank());

    render_product(app.product(), focus, &mut lines);

    lines.push(blank());
    lines.push(
        LineBuilder::new()
            .styled(
                " hover a colour to pick it · a add · r remove · t tabs · Tab form · q quit",
                muted(),
            )
            .build(),
    );

    Frame { lines }
}

fn render_product(product: &Product, focus: &FocusState, lines: &mut Vec<Line>) {
    let catalog = product.catalog();
    let selected = product.selected_index();

    let mut title = LineBuilder::new().styled(format!(" {}", product.title()), heading());
    if let Some(sale) = product.sale_message() {
        title = title.styled(format!(" - {sale}"), Style::plain().fg(Rgba::YELLOW));
    }
    lines.push(title.build());

    lines.push(
        LineBuilder::new()
            .styled(format!(" {}", catalog.brand()), Style::plain().attrs(Attr::UNDERLINE))
            .text(format!(" {}", catalog.description()))
            .styled(format!("  <{}>", catalog.link()), muted())
            .build(),
    );
    lines.push(
        LineBuilder::new()
            .text(format!(" Image: {}", product.image()))
            .styled(format!("  ({})", catalog.alt_text()), muted())
            .build(),
    );

    let stock = if product.in_stock() {
        LineBuilder::new().styled(" In Stock", Style::plain().fg(Rgba::ACCENT))
    } else {
        LineBuilder::new().styled(" Out of Stock", error())
    };
    lines.push(stock.build());
    lines.push(
        LineBuilder::new()
            .text(format!(" Shipping: {}", product.shipping_cost()))
            .build(),
    );

    for detail in product.details().details() {
        lines.push(LineBuilder::new().text(format!("  • {detail}")).build());
    }

    let mut colors = LineBuilder::new().text(" Colors: ");
    for (index, v) in catalog.variants().iter().enumerate() {
        let mut style = Style::plain().fg(Rgba::WHITE).bg(Rgba::from_name(&v.color));
        if index == selected {
            style = style.attrs(Attr::BOLD | Attr::UNDERLINE);
        }
        colors = colors
            .target(format!(" {} ", v.color), style, HitTarget::Swatch(index))
            .text(" ");
    }
    lines.push(colors.build());

    lines.push(
        LineBuilder::new()
            .text(format!(" Size: {}", catalog.sizes().join(" · ")))
            .build(),
    );

    let in_stock = product.in_stock();
    lines.push(
        LineBuilder::new()
            .text(" ")
            .target(" Add to Cart ", button(in_stock), HitTarget::AddToCart)
            .text("  ")
            .target(" Remove from Cart ", button(true), HitTarget::RemoveFromCart)
            .build(),
    );

    lines.push(blank());
    lines.push(
        LineBuilder::new()
            .styled(" What our Clients said!", heading())
            .build(),
    );
    render_tabs(product.tabs(), focus, lines);
}

fn render_tabs(tabs: &ReviewTabs, focus: &FocusState, lines: &mut Vec<Line>) {
    let mut bar = LineBuilder::new().text(" ");
    for tab in Tab::ALL {
        let style = if tabs.is_showing(tab) {
            Style::plain().fg(Rgba::ACCENT).attrs(Attr::BOLD | Attr::UNDERLINE)
        } else {
            muted()
        };
        bar = bar.target(format!("[{}]", tab.label()), style, HitTarget::Tab(tab)).text(" ");
    }
    lines.push(bar.build());

    if tabs.is_showing(Tab::Reviews) {
        let reviews = tabs.reviews();
        if reviews.is_empty() {
            lines.push(LineBuilder::new().styled(format!(" {NO_REVIEWS_MESSAGE}"), muted()).build());
        }
        for review in reviews {
            lines.push(
                LineBuilder::new()
                    .styled(format!("  Name: {}", review.name), heading())
                    .text(format!("   Recommended: {}", review.recommend))
                    .build(),
            );
            lines.push(LineBuilder::new().text(format!("  Comment: {}", review.review)).build());
            lines.push(LineBuilder::new().text(format!("  Rating: {}", review.rating)).build());
        }
    }

    if tabs.is_showing(Tab::MakeAReview) {
        render_form(tabs.form(), focus, lines);
    }
}

fn render_form(form: &ReviewForm, focus: &FocusState, lines: &mut Vec<Line>) {
    let errors = form.errors();
    if !errors.is_empty() {
        lines.push(
            LineBuilder::new()
                .styled(" Please correct the following error(s):", error().attrs(Attr::BOLD))
                .build(),
        );
        for err in errors {
            lines.push(LineBuilder::new().styled(format!("  • {err}"), error()).build());
        }
    }

    let field = |label: &str, value: String, control: FormControl| {
        let style = focused(Style::plain().attrs(Attr::UNDERLINE), focus.is_focused(control));
        LineBuilder::new()
            .text(format!(" {label:<8}"))
            .target(format!("{value:<24}"), style, HitTarget::Control(control))
            .build()
    };
    lines.push(field("Name:", form.name(), FormControl::Name));
    lines.push(field("Review:", form.review(), FormControl::Review));

    let mut recommend = LineBuilder::new().target(
        " Would you recommend this product? ",
        focused(Style::plain(), focus.is_focused(FormControl::Recommend)),
        HitTarget::Control(FormControl::Recommend),
    );
    for choice in Recommendation::ALL {
        let mark = if form.recommend() == Some(choice) { "(•)" } else { "( )" };
        recommend = recommend
            .target(format!("{mark} {choice}"), Style::plain(), HitTarget::Recommend(choice))
            .text("  ");
    }
    lines.push(recommend.build());

    let mut rating = LineBuilder::new().target(
        " Rating: ",
        focused(Style::plain(), focus.is_focused(FormControl::Rating)),
        HitTarget::Control(FormControl::Rating),
    );
    for choice in Rating::CHOICES {
        let style = if form.rating() == Some(choice) {
            Style::plain().fg(Rgba::ACCENT).attrs(Attr::BOLD | Attr::INVERSE)
        } else {
            Style::plain()
        };
        rating = rating
            .target(format!(" {choice} "), style, HitTarget::Rating(choice))
            .text(" ");
    }
    lines.push(rating.build());

    lines.push(
        LineBuilder::new()
            .text(" ")
            .target(
                " Submit ",
                focused(button(true), focus.is_focused(FormControl::Submit)),
                HitTarget::Control(FormControl::Submit),
            )
            .build(),
    );
}

// =============================================================================
// TESTS
// =============================================================================
