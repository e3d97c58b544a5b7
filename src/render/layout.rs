/// Fixed card layout.
/// All coordinates are in template pixels and assume the stock field
/// template shipped in `assets/img/field.png`.

pub const TEAM_LOGO_SIZE: u32 = 80;
pub const LEAGUE_LOGO_SIZE: u32 = 35;
pub const TEAM_NAME_SIZE: f32 = 30.0;
pub const LEAGUE_NAME_SIZE: f32 = 20.0;
/// Vertical gap between a team logo and its name
pub const NAME_GAP: i32 = 10;

/// Where a logo is pasted and the square it is resized to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoSlot {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

impl LogoSlot {
    /// Horizontal center of the slot (integer division, as drawn)
    pub fn center_x(&self) -> i32 {
        self.x + self.size as i32 / 2
    }

    /// Text slot centered under this logo
    fn caption(&self, gap: i32, font_size: f32) -> TextSlot {
        TextSlot {
            center_x: self.center_x(),
            top_y: self.y + self.size as i32 + gap,
            font_size,
        }
    }
}

/// Anchor for a horizontally centered line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSlot {
    pub center_x: i32,
    pub top_y: i32,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub home_logo: LogoSlot,
    pub away_logo: LogoSlot,
    pub league_logo: LogoSlot,
    pub home_name: TextSlot,
    pub away_name: TextSlot,
    pub league_name: TextSlot,
}

impl Default for Layout {
    fn default() -> Self {
        let home_logo = LogoSlot { x: 220, y: 206, size: TEAM_LOGO_SIZE };
        let away_logo = LogoSlot { x: 587, y: 206, size: TEAM_LOGO_SIZE };
        let league_logo = LogoSlot { x: 420, y: 458, size: LEAGUE_LOGO_SIZE };

        Self {
            home_logo,
            away_logo,
            league_logo,
            home_name: home_logo.caption(NAME_GAP, TEAM_NAME_SIZE),
            away_name: away_logo.caption(NAME_GAP, TEAM_NAME_SIZE),
            // League name sits at a fixed row, not directly under its logo
            league_name: TextSlot {
                center_x: league_logo.center_x(),
                top_y: 503,
                font_size: LEAGUE_NAME_SIZE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_anchors() {
        let layout = Layout::default();
        assert_eq!((layout.home_name.center_x, layout.home_name.top_y), (260, 296));
        assert_eq!((layout.away_name.center_x, layout.away_name.top_y), (627, 296));
        assert_eq!((layout.league_name.center_x, layout.league_name.top_y), (437, 503));
        assert_eq!(layout.league_name.font_size, 20.0);
    }
}
