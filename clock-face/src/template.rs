use std::f64::consts::TAU;

use clock_lib::NATIVE_SIZE;
use once_cell::sync::Lazy;
use svg::node::element::{Circle, Group, Line};
use svg::Document;

const CENTER: (f64, f64) = (NATIVE_SIZE / 2.0, NATIVE_SIZE / 2.0);
const FACE_RADIUS: f64 = 48.0;
const TICK_OUTER: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Size,
    Fg,
    Bg,
    Hour,
    Minute,
    Second,
    Scale,
}

impl Placeholder {
    pub const ALL: [Placeholder; 7] = [
        Placeholder::Size,
        Placeholder::Fg,
        Placeholder::Bg,
        Placeholder::Hour,
        Placeholder::Minute,
        Placeholder::Second,
        Placeholder::Scale,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Size => "SIZE",
            Placeholder::Fg => "FG",
            Placeholder::Bg => "BG",
            Placeholder::Hour => "HOUR",
            Placeholder::Minute => "MINUTE",
            Placeholder::Second => "SECOND",
            Placeholder::Scale => "SCALE",
        }
    }

    /// The marker as it appears in the template text, e.g. `{{HOUR}}`.
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

struct Hand {
    id: &'static str,
    angle: Placeholder,
    length: f64,
    tail: f64,
    width: f64,
}

const HANDS: [Hand; 3] = [
    Hand {
        id: "hour-hand",
        angle: Placeholder::Hour,
        length: 22.0,
        tail: 0.0,
        width: 3.5,
    },
    Hand {
        id: "minute-hand",
        angle: Placeholder::Minute,
        length: 34.0,
        tail: 0.0,
        width: 2.5,
    },
    Hand {
        id: "second-hand",
        angle: Placeholder::Second,
        length: 40.0,
        tail: 8.0,
        width: 1.0,
    },
];

// keeps tick coordinates short in the output
fn round(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Point at `radius` from the centre, `angle` radians clockwise from 12 o'clock.
fn get_position(radius: f64, angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (round(CENTER.0 + sin * radius), round(CENTER.1 - cos * radius))
}

fn make_tick(i: usize) -> Line {
    let angle = TAU * i as f64 / 60.0;
    let (inner_radius, width) = if i % 5 == 0 { (38.0, 1.5) } else { (42.0, 0.5) };

    let (x1, y1) = get_position(inner_radius, angle);
    let (x2, y2) = get_position(TICK_OUTER, angle);

    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke-width", width)
}

fn make_hand(hand: &Hand) -> Line {
    Line::new()
        .set("id", hand.id)
        .set("x1", CENTER.0)
        .set("y1", CENTER.1 + hand.tail)
        .set("x2", CENTER.0)
        .set("y2", CENTER.1 - hand.length)
        .set("stroke-width", hand.width)
        .set(
            "transform",
            format!("rotate({} {} {})", hand.angle.token(), CENTER.0, CENTER.1),
        )
}

fn make_document() -> Document {
    let fg = Placeholder::Fg.token();
    let bg = Placeholder::Bg.token();
    let size = Placeholder::Size.token();

    let face = Circle::new()
        .set("cx", CENTER.0)
        .set("cy", CENTER.1)
        .set("r", FACE_RADIUS)
        .set("fill", bg.as_str())
        .set("stroke", fg.as_str())
        .set("stroke-width", 1.5);

    let ticks = (0..60).fold(
        Group::new().set("stroke", fg.as_str()).set("stroke-linecap", "round"),
        |group, i| group.add(make_tick(i)),
    );

    let hands = HANDS.iter().fold(
        Group::new().set("stroke", fg.as_str()).set("stroke-linecap", "round"),
        |group, hand| group.add(make_hand(hand)),
    );

    let cap = Circle::new()
        .set("cx", CENTER.0)
        .set("cy", CENTER.1)
        .set("r", 2.0)
        .set("fill", fg.as_str());

    let scaled = Group::new()
        .set("transform", format!("scale({})", Placeholder::Scale.token()))
        .add(face)
        .add(ticks)
        .add(hands)
        .add(cap);

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", size.as_str())
        .set("height", size.as_str())
        .add(scaled)
}

/// The clock face with every variable part left as a placeholder token.
pub static TEMPLATE: Lazy<String> = Lazy::new(|| make_document().to_string());
