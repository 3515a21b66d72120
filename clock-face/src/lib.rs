mod substitute;
mod surface;
mod template;

use std::collections::HashMap;

use clock_lib::RenderParameters;

pub use substitute::substitute;
pub use surface::{FileSurface, MemorySurface, Surface};
pub use template::{Placeholder, TEMPLATE};

pub fn placeholder_values(params: &RenderParameters) -> HashMap<&'static str, String> {
    Placeholder::ALL
        .into_iter()
        .map(|p| {
            let value = match p {
                Placeholder::Size => params.size_pixels.to_string(),
                Placeholder::Fg => params.foreground.clone(),
                Placeholder::Bg => params.background.clone(),
                Placeholder::Hour => params.hour_angle.to_string(),
                Placeholder::Minute => params.minute_angle.to_string(),
                Placeholder::Second => params.second_angle.to_string(),
                Placeholder::Scale => params.scale_factor.to_string(),
            };
            (p.name(), value)
        })
        .collect()
}

/// Fills the clock template for one tick.
pub fn render_document(params: &RenderParameters) -> String {
    substitute(&TEMPLATE, &placeholder_values(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clock_lib::{ColorPair, WallClockTime};
    use itertools::iproduct;
    use std::num::NonZeroU32;

    fn params(h: u32, m: u32, s: u32, size: u32) -> RenderParameters {
        RenderParameters::new(
            &WallClockTime::new(h, m, s).unwrap(),
            NonZeroU32::new(size).unwrap(),
            &ColorPair {
                foreground: [0x11, 0x22, 0x33],
                background: [0xfe, 0xfd, 0xfc],
            },
        )
    }

    #[test]
    fn test_quarter_past_three() {
        let doc = render_document(&params(3, 15, 30, 250));
        assert!(doc.contains("rotate(97.5 50 50)"));
        assert!(doc.contains("rotate(93 50 50)"));
        assert!(doc.contains("rotate(180 50 50)"));
        assert!(doc.contains("scale(2.5)"));
        assert!(doc.contains(r#"width="250""#));
        assert!(doc.contains(r#"height="250""#));
        assert!(doc.contains("#112233"));
        assert!(doc.contains("#FEFDFC"));
        assert!(!doc.contains("{{"));
    }

    #[test]
    fn test_idempotent() {
        for (h, m, s) in iproduct!([0, 7, 23], [0, 41], [0, 59]) {
            let p = params(h, m, s, 120);
            assert_eq!(render_document(&p), render_document(&p));
        }
    }

    #[test]
    fn test_values_contain_no_tokens() {
        let values = placeholder_values(&params(11, 59, 59, 1));
        assert_eq!(values.len(), Placeholder::ALL.len());
        assert!(values.values().all(|v| !v.contains("{{")));
        assert_eq!(values["SCALE"], "0.01");
        assert_eq!(values["MINUTE"], "359.9");
    }
}
