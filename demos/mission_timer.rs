//! Mission timer dial demo that writes `mission-timer.svg`.
//!
//! A 60-minute timer dial: a split-tapered top marker over a center
//! channel, tapered major and hour indices, rectangular minute ticks with
//! minutes 1 and 59 suppressed either side of the top marker, no
//! sub-minute tier and no hands.
//!
//! ```text
//! cargo run --example mission_timer
//! ```

use std::fs;

use horolis::dial::{
    enumerate_ticks, index_transform, track_transform, DialConfig, TemplateTransform, TickClass,
    TickTemplates,
};
use horolis::geometry::{
    split_tapered_outline, tapered_outline, BaseStyle, Outline, PathCommand, SweepDirection,
    TaperSpec,
};
use horolis::math::angle::{ONE_MINUTE, QUARTER_MINUTE};
use horolis::math::Point2;

const OUTPUT: &str = "mission-timer.svg";

/// Index outer radius shared by every tier.
const INDEX_RADIUS: f64 = 975.0;

/// Height of the minute-grade indices.
const INDEX_HEIGHT: f64 = 150.0;

/// Center channel half-width of the top marker.
const TOP_GAP: f64 = 7.0;

/// Tiers this face draws. The quarter-minute grid stays bare, so the sub
/// tier is left off the list rather than resolved through the template
/// chain, where it would inherit the minute rect.
const TIERS: [TickClass; 4] = [
    TickClass::Top,
    TickClass::Major,
    TickClass::Hour,
    TickClass::Minute,
];

/// A tier template this SVG surface knows how to emit.
enum Template {
    Outlines(Vec<Outline>),
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = DialConfig::new(Point2::new(1200.0, 1200.0), 1000.0)?.with_minute_skip([1, 59]);

    let tall = TaperSpec {
        outer_radius: INDEX_RADIUS,
        height: 2.5 * INDEX_HEIGHT,
        half_angle: QUARTER_MINUTE,
        base: BaseStyle::Curved,
    };
    let top_marker = split_tapered_outline(
        &TaperSpec {
            half_angle: ONE_MINUTE,
            ..tall
        },
        TOP_GAP,
    )?;
    let major = tapered_outline(&tall)?;
    let hour = tapered_outline(&TaperSpec {
        height: INDEX_HEIGHT,
        ..tall
    })?;

    let templates = TickTemplates {
        top: Some(Template::Outlines(top_marker.into())),
        major: Some(Template::Outlines(vec![major])),
        hour: Some(Template::Outlines(vec![hour])),
        minute: Some(Template::Rect {
            x: 496.0,
            y: 25.0,
            width: 8.0,
            height: 150.0,
        }),
        sub: None,
    };

    let svg = render(&config, &templates);
    fs::write(OUTPUT, svg)?;
    tracing::info!("wrote {OUTPUT}");
    Ok(())
}

fn render(config: &DialConfig, templates: &TickTemplates<Template>) -> String {
    let size = 2.0 * config.center().x;
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
         width=\"{size}\" height=\"{size}\" fill=\"black\" stroke=\"none\">\n"
    ));

    svg.push_str("<defs>\n");
    for class in TIERS {
        if let Some(template) = templates.resolve(class) {
            svg.push_str(&format!("<g id=\"{}\">\n", tier_id(class)));
            svg.push_str(&template_markup(template));
            svg.push_str("</g>\n");
        }
    }
    svg.push_str(track_markup());
    svg.push_str("</defs>\n");

    svg.push_str(&format!(
        "<use xlink:href=\"#track\" transform=\"{}\"/>\n",
        transform_attr(&track_transform(config))
    ));

    for tick in enumerate_ticks(config) {
        if !TIERS.contains(&tick.class) || templates.resolve(tick.class).is_none() {
            continue;
        }
        let transform = index_transform(config, tick.angle);
        svg.push_str(&format!(
            "<use xlink:href=\"#{}\" transform=\"{}\"/>\n",
            tier_id(tick.class),
            transform_attr(&transform)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn tier_id(class: TickClass) -> &'static str {
    match class {
        TickClass::Top => "top",
        TickClass::Major => "major",
        TickClass::Hour => "hour",
        TickClass::Minute => "minute",
        TickClass::Sub => "sub",
    }
}

fn template_markup(template: &Template) -> String {
    match template {
        Template::Outlines(outlines) => outlines
            .iter()
            .map(|outline| format!("<path d=\"{}\"/>\n", path_data(outline)))
            .collect(),
        Template::Rect {
            x,
            y,
            width,
            height,
        } => {
            format!("<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\"/>\n")
        }
    }
}

/// Crosshair, center dot and boundary circle in the doubled track square.
fn track_markup() -> &'static str {
    concat!(
        "<g id=\"track\">\n",
        "<rect x=\"800\" y=\"999\" width=\"400\" height=\"2\"/>\n",
        "<rect x=\"999\" y=\"800\" width=\"2\" height=\"400\"/>\n",
        "<circle cx=\"1000\" cy=\"1000\" r=\"10\"/>\n",
        "<circle cx=\"1000\" cy=\"1000\" r=\"1000\" stroke=\"black\" stroke-width=\"1\" fill=\"none\"/>\n",
        "</g>\n",
    )
}

fn path_data(outline: &Outline) -> String {
    let mut d = String::new();
    for command in &outline.commands {
        match *command {
            PathCommand::MoveTo(p) => d.push_str(&format!("M {} {} ", p.x, p.y)),
            PathCommand::LineTo(p) => d.push_str(&format!("L {} {} ", p.x, p.y)),
            PathCommand::ArcTo { end, radius, sweep } => {
                let flag = match sweep {
                    SweepDirection::Clockwise => 1,
                    SweepDirection::CounterClockwise => 0,
                };
                d.push_str(&format!("A {radius} {radius} 0 0 {flag} {} {} ", end.x, end.y));
            }
            PathCommand::Close => d.push_str("Z "),
        }
    }
    d.trim_end().to_string()
}

fn transform_attr(t: &TemplateTransform) -> String {
    format!(
        "translate({} {}) rotate({} {} {}) scale({})",
        t.translate.x, t.translate.y, t.rotation_deg, t.pivot.x, t.pivot.y, t.scale
    )
}
