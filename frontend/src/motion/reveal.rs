/// Viewport band for in-view reveals: the viewport shrunk at the top and
/// bottom by `margin` (a fraction of its height) plus `inset_px`. An element
/// is in view when at least `amount` of its own height lies inside the band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealBand {
    pub margin: f64,
    pub inset_px: f64,
    pub amount: f64,
}

impl RevealBand {
    /// Band used by the problem statements.
    pub const CENTRE: RevealBand = RevealBand {
        margin: 0.3,
        inset_px: 0.0,
        amount: 0.3,
    };

    /// Any part of the element more than `px` inside the viewport counts.
    pub const fn inset(px: f64) -> RevealBand {
        RevealBand {
            margin: 0.0,
            inset_px: px,
            amount: 0.0,
        }
    }

    pub fn is_in_view(&self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        let band_top = viewport_height * self.margin + self.inset_px;
        let band_bottom = viewport_height * (1.0 - self.margin) - self.inset_px;
        let height = bottom - top;
        if !(height > 0.0) || band_bottom <= band_top {
            return false;
        }
        let visible = bottom.min(band_bottom) - top.max(band_top);
        if visible <= 0.0 {
            return false;
        }
        visible / height >= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_element_is_in_view() {
        assert!(RevealBand::CENTRE.is_in_view(450.0, 550.0, 1000.0));
    }

    #[test]
    fn element_in_outer_margin_is_not() {
        // Fully on screen, but inside the top 30%.
        assert!(!RevealBand::CENTRE.is_in_view(50.0, 250.0, 1000.0));
        assert!(!RevealBand::CENTRE.is_in_view(800.0, 950.0, 1000.0));
    }

    #[test]
    fn needs_enough_of_its_height_inside() {
        // 20 of 100px inside the band.
        assert!(!RevealBand::CENTRE.is_in_view(220.0, 320.0, 1000.0));
        // 60 of 100px inside the band.
        assert!(RevealBand::CENTRE.is_in_view(260.0, 360.0, 1000.0));
    }

    #[test]
    fn reveal_reverses_when_scrolled_away() {
        let band = RevealBand::CENTRE;
        let tops = [900.0, 450.0, 100.0, 450.0];
        let seen: Vec<bool> = tops
            .iter()
            .map(|&top| band.is_in_view(top, top + 80.0, 1000.0))
            .collect();
        assert_eq!(seen, vec![false, true, false, true]);
    }

    #[test]
    fn zero_inset_fires_on_first_pixel() {
        let band = RevealBand::inset(0.0);
        assert!(band.is_in_view(999.0, 1200.0, 1000.0));
        assert!(!band.is_in_view(1000.0, 1200.0, 1000.0));
    }

    #[test]
    fn pixel_inset_delays_the_reveal() {
        let band = RevealBand::inset(100.0);
        // On screen, but still within the bottom 100px.
        assert!(!band.is_in_view(920.0, 1200.0, 1000.0));
        assert!(!band.is_in_view(900.0, 1200.0, 1000.0));
        assert!(band.is_in_view(899.0, 1200.0, 1000.0));
        // Same on the way out at the top.
        assert!(!band.is_in_view(-300.0, 100.0, 1000.0));
        assert!(band.is_in_view(-300.0, 101.0, 1000.0));
    }

    #[test]
    fn inset_larger_than_half_the_viewport_never_fires() {
        assert!(!RevealBand::inset(600.0).is_in_view(0.0, 1000.0, 1000.0));
    }

    #[test]
    fn zero_sized_inputs_are_not_in_view() {
        assert!(!RevealBand::CENTRE.is_in_view(500.0, 500.0, 1000.0));
        assert!(!RevealBand::CENTRE.is_in_view(0.0, 100.0, 0.0));
    }
}
