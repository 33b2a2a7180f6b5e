//! Static outline table for the Indian states drawn on the map.

use crate::geometry::Point;

/// One state outline with the anchor for its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateShape {
    pub id: &'static str,
    pub name: &'static str,
    /// SVG path data in map coordinates.
    pub path: &'static str,
    pub label: Point,
}

const fn shape(id: &'static str, name: &'static str, path: &'static str, x: f64, y: f64) -> StateShape {
    StateShape {
        id,
        name,
        path,
        label: Point::new(x, y),
    }
}

pub static INDIAN_STATES: [StateShape; 29] = [
    shape("jammu-kashmir", "Jammu Kashmir", "M240,45 L280,40 L310,50 L340,45 L350,65 L330,85 L300,90 L270,85 L240,70 Z", 295.0, 67.0),
    shape("himachal-pradesh", "Himachal Pradesh", "M300,90 L340,85 L360,100 L350,120 L320,125 L300,115 Z", 330.0, 107.0),
    shape("punjab", "Punjab", "M270,85 L300,90 L300,115 L285,130 L270,125 L260,110 Z", 280.0, 107.0),
    shape("haryana", "Haryana", "M285,130 L300,115 L320,125 L330,140 L315,155 L300,150 L285,145 Z", 307.0, 137.0),
    shape("uttarakhand", "Uttarakhand", "M320,125 L350,120 L370,135 L360,155 L340,160 L320,150 Z", 345.0, 140.0),
    shape("uttar-pradesh", "Uttar Pradesh", "M300,150 L330,140 L360,155 L400,150 L420,170 L410,190 L380,195 L350,190 L320,185 L300,175 Z", 360.0, 170.0),
    shape("bihar", "Bihar", "M410,190 L450,185 L470,200 L460,220 L440,225 L420,215 L410,200 Z", 440.0, 205.0),
    shape("sikkim", "Sikkim", "M470,200 L485,195 L490,205 L485,215 L470,210 Z", 477.0, 205.0),
    shape("arunachal-pradesh", "Arunachal Pradesh", "M490,150 L540,145 L570,160 L565,185 L530,190 L500,185 L485,170 Z", 527.0, 167.0),
    shape("nagaland", "Nagaland", "M530,190 L565,185 L575,200 L570,215 L545,220 L530,205 Z", 552.0, 202.0),
    shape("manipur", "Manipur", "M545,220 L570,215 L580,230 L575,245 L550,250 L545,235 Z", 562.0, 232.0),
    shape("mizoram", "Mizoram", "M530,250 L550,245 L560,260 L555,275 L535,280 L530,265 Z", 545.0, 262.0),
    shape("tripura", "Tripura", "M500,240 L530,235 L540,250 L535,265 L505,270 L500,255 Z", 520.0, 252.0),
    shape("assam", "Assam", "M470,200 L500,185 L530,190 L530,235 L500,240 L480,235 L470,220 Z", 500.0, 217.0),
    shape("west-bengal", "West Bengal", "M440,225 L470,220 L480,235 L500,240 L505,270 L485,290 L460,285 L440,270 L430,250 Z", 470.0, 250.0),
    shape("jharkhand", "Jharkhand", "M380,225 L420,215 L440,225 L440,250 L420,265 L395,260 L380,245 Z", 410.0, 242.0),
    shape("odisha", "Odisha", "M420,265 L440,250 L460,270 L470,295 L450,320 L425,315 L410,295 L415,280 Z", 440.0, 285.0),
    shape("rajasthan", "Rajasthan", "M200,120 L270,110 L285,130 L285,180 L270,220 L240,240 L200,235 L170,210 L160,180 L170,150 Z", 225.0, 180.0),
    shape("gujarat", "Gujarat", "M170,210 L240,240 L250,280 L230,320 L190,340 L150,330 L130,300 L140,270 L160,250 Z", 190.0, 285.0),
    shape("madhya-pradesh", "Madhya Pradesh", "M270,220 L350,190 L380,195 L380,225 L395,260 L380,290 L350,310 L320,315 L290,310 L270,285 L250,260 Z", 325.0, 252.0),
    shape("chhattisgarh", "Chhattisgarh", "M380,290 L395,260 L420,265 L415,295 L395,320 L375,325 L360,315 L365,300 Z", 387.0, 292.0),
    shape("maharashtra", "Maharashtra", "M230,320 L290,310 L320,315 L350,310 L365,340 L350,380 L320,400 L280,395 L250,380 L220,360 Z", 295.0, 355.0),
    shape("goa", "Goa", "M220,380 L250,375 L255,390 L250,405 L225,410 L220,395 Z", 237.0, 392.0),
    shape("karnataka", "Karnataka", "M250,380 L320,400 L340,430 L320,470 L290,490 L260,485 L240,460 L230,430 Z", 285.0, 440.0),
    shape("andhra-pradesh", "Andhra Pradesh", "M340,430 L395,320 L425,315 L450,340 L460,380 L440,420 L410,450 L380,460 L350,455 Z", 400.0, 390.0),
    shape("telangana", "Telangana", "M350,310 L395,320 L410,340 L395,365 L375,370 L355,365 L345,345 Z", 377.0, 345.0),
    shape("kerala", "Kerala", "M240,460 L290,490 L295,530 L275,570 L245,575 L225,555 L215,515 Z", 255.0, 517.0),
    shape("tamil-nadu", "Tamil Nadu", "M290,490 L380,460 L410,480 L420,520 L400,560 L370,590 L340,595 L310,590 L285,570 L275,530 Z", 350.0, 527.0),
    shape("delhi", "Delhi", "M300,150 L310,145 L315,155 L310,165 L300,170 L295,160 Z", 305.0, 157.0),
];

/// The stylised coastline drawn over the state outlines.
pub const COASTLINE_PATH: &str =
    "M150,330 L190,340 L230,380 L220,410 L240,460 L290,490 L410,480 L450,340 L470,295 L440,270 L485,290 L505,270";

pub fn find_state(id: &str) -> Option<&'static StateShape> {
    INDIAN_STATES.iter().find(|s| s.id == id)
}

/// Fill for a state outline. Hover wins over selection.
pub fn state_fill(id: &str, hovered: Option<&str>, selected: Option<&str>) -> &'static str {
    if hovered == Some(id) {
        "rgba(59, 130, 246, 0.4)"
    } else if selected == Some(id) {
        "rgba(59, 130, 246, 0.3)"
    } else {
        "rgba(30, 41, 59, 0.8)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{VIEW_HEIGHT, VIEW_WIDTH};
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = INDIAN_STATES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), INDIAN_STATES.len());
    }

    #[test]
    fn labels_sit_inside_the_view() {
        for s in &INDIAN_STATES {
            assert!(
                (0.0..=VIEW_WIDTH).contains(&s.label.x) && (0.0..=VIEW_HEIGHT).contains(&s.label.y),
                "{} label out of view",
                s.id
            );
            assert!(s.path.starts_with('M') && s.path.ends_with('Z'), "{} path not closed", s.id);
        }
    }

    #[test]
    fn lookup_by_id() {
        let tn = find_state("tamil-nadu").unwrap();
        assert_eq!(tn.name, "Tamil Nadu");
        assert_eq!(tn.label, Point::new(350.0, 527.0));
        assert!(find_state("atlantis").is_none());
    }

    #[test]
    fn hover_beats_selection() {
        assert_eq!(state_fill("goa", Some("goa"), Some("goa")), "rgba(59, 130, 246, 0.4)");
        assert_eq!(state_fill("goa", None, Some("goa")), "rgba(59, 130, 246, 0.3)");
        assert_eq!(state_fill("goa", Some("kerala"), None), "rgba(30, 41, 59, 0.8)");
    }
}
