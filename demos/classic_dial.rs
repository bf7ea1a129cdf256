//! Classic dial demo that writes `classic-dial.svg`.
//!
//! The stock rectangular-index dial: graded rectangle ticks on every tier,
//! no suppressed minutes, a plain circular track, and all three hands swept
//! to the catalogue display time 10:09:29.2.
//!
//! ```text
//! cargo run --example classic_dial
//! ```

use std::fs;

use horolis::dial::{
    enumerate_ticks, hand_angles, hand_transform, index_transform, track_transform, DialConfig,
    TemplateTransform, TickClass, TickTemplates,
};
use horolis::math::Point2;

const OUTPUT: &str = "classic-dial.svg";

const TIERS: [TickClass; 5] = [
    TickClass::Top,
    TickClass::Major,
    TickClass::Hour,
    TickClass::Minute,
    TickClass::Sub,
];

/// An axis-aligned rectangle in reference-square coordinates.
#[derive(Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = DialConfig::new(Point2::new(1200.0, 1200.0), 1000.0)?;

    // Tick weights graded by tier, widest at the top marker.
    let templates = TickTemplates {
        top: Some(Rect::new(475.0, 0.0, 50.0, 250.0)),
        major: Some(Rect::new(480.0, 0.0, 40.0, 250.0)),
        hour: Some(Rect::new(490.0, 0.0, 20.0, 125.0)),
        minute: Some(Rect::new(498.0, 0.0, 4.0, 50.0)),
        sub: Some(Rect::new(499.0, 0.0, 2.0, 25.0)),
    };
    // Hand silhouettes start just above the pivot, leaving a short
    // counterweight stub once the transform flips them.
    let hands = [
        ("hourhand", Rect::new(480.0, 980.0, 40.0, 370.0)),
        ("minhand", Rect::new(490.0, 980.0, 20.0, 720.0)),
        ("sechand", Rect::new(495.0, 950.0, 10.0, 975.0)),
    ];

    let svg = render(&config, &templates, &hands);
    fs::write(OUTPUT, svg)?;
    tracing::info!("wrote {OUTPUT}");
    Ok(())
}

fn render(
    config: &DialConfig,
    templates: &TickTemplates<Rect>,
    hands: &[(&str, Rect); 3],
) -> String {
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
        if let Some(rect) = templates.resolve(class) {
            svg.push_str(&format!("<g id=\"{}\">\n", tier_id(class)));
            svg.push_str(&rect_markup(rect));
            svg.push_str("</g>\n");
        }
    }
    for (id, rect) in hands {
        svg.push_str(&format!("<g id=\"{id}\">\n"));
        svg.push_str(&rect_markup(rect));
        svg.push_str("</g>\n");
    }
    svg.push_str(
        "<g id=\"track\">\n\
         <circle cx=\"1000\" cy=\"1000\" r=\"1000\" stroke=\"black\" stroke-width=\"1\" fill=\"none\"/>\n\
         </g>\n",
    );
    svg.push_str("</defs>\n");

    svg.push_str(&format!(
        "<use xlink:href=\"#track\" transform=\"{}\"/>\n",
        transform_attr(&track_transform(config))
    ));

    for tick in enumerate_ticks(config) {
        if templates.resolve(tick.class).is_none() {
            continue;
        }
        svg.push_str(&format!(
            "<use xlink:href=\"#{}\" transform=\"{}\"/>\n",
            tier_id(tick.class),
            transform_attr(&index_transform(config, tick.angle))
        ));
    }

    let (hour, minute, second) = hand_angles(config);
    for ((id, _), angle) in hands.iter().zip([hour, minute, second]) {
        svg.push_str(&format!(
            "<use xlink:href=\"#{id}\" transform=\"{}\"/>\n",
            transform_attr(&hand_transform(config, angle))
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

fn rect_markup(rect: &Rect) -> String {
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>\n",
        rect.x, rect.y, rect.width, rect.height
    )
}

fn transform_attr(t: &TemplateTransform) -> String {
    format!(
        "translate({} {}) rotate({} {} {}) scale({})",
        t.translate.x, t.translate.y, t.rotation_deg, t.pivot.x, t.pivot.y, t.scale
    )
}
