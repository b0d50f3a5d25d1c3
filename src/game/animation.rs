//! # Animation
//!
//! Per-frame stepping of animated cells, pending redraws and the occupied
//! player cell.

use crate::game::Map;
use log::trace;

/// Cells repainted during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Indices in map order
    pub repainted: Vec<usize>,
    /// Animated objects that finished this frame
    pub finished_objects: Vec<usize>,
}

impl FrameReport {
    /// Whether nothing changed this frame.
    pub fn is_idle(&self) -> bool {
        self.repainted.is_empty() && self.finished_objects.is_empty()
    }
}

impl Map {
    /// Advances every live cell by one animation frame.
    ///
    /// A pending redraw wins over everything and is consumed. The player's
    /// cell is repainted every frame. Animated cells count down and, when the
    /// counter hits zero, paint their next step; an animated object is
    /// removed once its last step has been painted.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::{Map, Options};
    ///
    /// let mut map = Map::new(&Options::for_testing(3, 3), 75.0, 75.0).unwrap();
    /// map.place_door(4).unwrap();
    ///
    /// assert_eq!(map.advance_frame().repainted, vec![4]);
    /// assert!(map.advance_frame().is_idle());
    /// ```
    pub fn advance_frame(&mut self) -> FrameReport {
        let mut report = FrameReport::default();

        for cell in self
            .cells
            .iter_mut()
            .filter(|cell| cell.is_animated || cell.should_redraw || cell.is_occupied)
        {
            if cell.should_redraw {
                cell.should_redraw = false;
                report.repainted.push(cell.index);
                continue;
            }

            if cell.is_occupied && cell.is_player_occupied {
                report.repainted.push(cell.index);
                continue;
            }

            let Some(spec) = cell.current_animation() else {
                continue;
            };

            if cell.animation_step_counter == 0 {
                if cell.animation_step >= spec.len() {
                    cell.animation_step = 0;
                }

                cell.frame_glyph = Some(spec.steps[cell.animation_step]);
                report.repainted.push(cell.index);

                cell.animation_step_counter = spec.frames_per_step;
                cell.animation_step += 1;

                if cell.animated_object.is_some() && cell.animation_step >= spec.len() {
                    cell.unset_animated_object();
                    report.finished_objects.push(cell.index);
                }
            } else {
                cell.animation_step_counter -= 1;
            }
        }

        if !report.is_idle() {
            trace!("frame repainted {:?}", report.repainted);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{AnimatedObject, CellType, Direction, Map, Options};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn map() -> Map {
        Map::new(&Options::for_testing(3, 3), 75.0, 75.0).unwrap()
    }

    #[test]
    fn test_plain_map_is_idle() {
        let mut map = map();
        assert!(map.advance_frame().is_idle());
    }

    #[test]
    fn test_water_steps_every_twenty_six_frames() {
        let mut map = map();
        let mut rng = StdRng::seed_from_u64(9);
        map.set_cell(0, CellType::Water, &mut rng).unwrap();
        map.get_mut(0).unwrap().animation_step = 0;

        // Counter starts at 25 and counts down to zero before painting.
        for _ in 0..25 {
            assert!(map.advance_frame().repainted.is_empty());
        }
        assert_eq!(map.advance_frame().repainted, vec![0]);
        assert_eq!(map.get(0).unwrap().frame_glyph, Some('-'));
        assert_eq!(map.get(0).unwrap().animation_step, 1);
        assert_eq!(map.get(0).unwrap().animation_step_counter, 25);
    }

    #[test]
    fn test_animation_wraps_after_last_step() {
        let mut map = map();
        let mut rng = StdRng::seed_from_u64(9);
        map.set_cell(0, CellType::Water, &mut rng).unwrap();
        {
            let cell = map.get_mut(0).unwrap();
            cell.animation_step = 2;
            cell.animation_step_counter = 0;
        }

        map.advance_frame();
        assert_eq!(map.get(0).unwrap().frame_glyph, Some('~'));
        assert_eq!(map.get(0).unwrap().animation_step, 3);

        map.get_mut(0).unwrap().animation_step_counter = 0;
        map.advance_frame();
        assert_eq!(map.get(0).unwrap().frame_glyph, Some('-'));
        assert_eq!(map.get(0).unwrap().animation_step, 1);
    }

    #[test]
    fn test_empty_attack_runs_once_then_clears() {
        let mut map = map();
        map.get_mut(4)
            .unwrap()
            .set_animated_object(AnimatedObject::EmptyAttack);

        // Two frames of countdown, then the first step.
        assert!(map.advance_frame().repainted.is_empty());
        assert!(map.advance_frame().repainted.is_empty());
        let report = map.advance_frame();
        assert_eq!(report.repainted, vec![4]);
        assert_eq!(map.get(4).unwrap().appearance(Direction::Right).glyph, '˟');

        map.advance_frame();
        map.advance_frame();
        let report = map.advance_frame();
        assert_eq!(report.finished_objects, vec![4]);

        let cell = map.get(4).unwrap();
        assert!(cell.animated_object.is_none());
        assert!(!cell.is_animated);
        assert!(cell.should_redraw);

        // The pending redraw is consumed on the next frame.
        assert_eq!(map.advance_frame().repainted, vec![4]);
        assert!(map.advance_frame().is_idle());
    }

    #[test]
    fn test_pending_redraw_skips_countdown_on_water() {
        let mut map = map();
        let mut rng = StdRng::seed_from_u64(9);
        map.set_cell(2, CellType::Water, &mut rng).unwrap();
        map.get_mut(2).unwrap().should_redraw = true;

        assert_eq!(map.advance_frame().repainted, vec![2]);
        let cell = map.get(2).unwrap();
        assert!(!cell.should_redraw);
        assert_eq!(cell.animation_step_counter, 25);

        map.advance_frame();
        assert_eq!(map.get(2).unwrap().animation_step_counter, 24);
    }

    #[test]
    fn test_lava_runs_full_cycle_then_wraps() {
        let mut map = map();
        let mut rng = StdRng::seed_from_u64(9);
        map.set_cell(0, CellType::Lava, &mut rng).unwrap();
        {
            let cell = map.get_mut(0).unwrap();
            cell.animation_step = 0;
            cell.animation_step_counter = 0;
        }

        // One paint, then fifteen frames of countdown, per step.
        let mut glyphs = Vec::new();
        for _ in 0..7 * 16 {
            if map.advance_frame().repainted.contains(&0) {
                glyphs.push(map.get(0).unwrap().frame_glyph);
            }
        }
        let expected: Vec<Option<char>> = ['-', '-', '~', '˚', '-', '-', '~']
            .into_iter()
            .map(Some)
            .collect();
        assert_eq!(glyphs, expected);
        assert_eq!(map.get(0).unwrap().animation_step, 7);

        assert_eq!(map.advance_frame().repainted, vec![0]);
        assert_eq!(map.get(0).unwrap().frame_glyph, Some('-'));
        assert_eq!(map.get(0).unwrap().animation_step, 1);
    }

    #[test]
    fn test_player_cell_repaints_every_frame() {
        let mut map = map();
        {
            let cell = map.get_mut(8).unwrap();
            cell.is_occupied = true;
            cell.is_player_occupied = true;
        }

        for _ in 0..3 {
            assert_eq!(map.advance_frame().repainted, vec![8]);
        }
    }
}
