use gridschem_core::Circuit;

use crate::chips::draw_active_chips;
use crate::grid::Grid;
use crate::labels::{draw_connection_points, draw_net_labels};
use crate::options::RenderOptions;
use crate::passives::draw_passives;
use crate::wires::draw_lines;

/// Render a placed circuit onto a fresh grid.
///
/// Passes run in a fixed order and later passes overwrite earlier ones:
/// chip bodies, net labels, wires, junction dots, then passives.
pub fn render_circuit(circuit: &Circuit, opts: &RenderOptions) -> Grid {
    let mut grid = Grid::new(opts.scale()).with_axis_labels(opts.show_axis_labels);

    for (a, b) in circuit.overlapping_chips() {
        log::warn!(
            "chip bodies overlap: {} and {}",
            circuit.chips[a].id,
            circuit.chips[b].id
        );
    }

    // Phase 1: Active chips
    let chips = draw_active_chips(&mut grid, &circuit.chips, opts.chip_labels);
    log::debug!("drew {} active chips", chips);

    // Phase 2: Net labels
    let labels = draw_net_labels(&mut grid, &circuit.net_labels);
    log::debug!("drew {} net labels", labels);

    // Phase 3: Wires
    let lines = draw_lines(&mut grid, &circuit.lines);
    log::debug!("drew {} of {} lines", lines, circuit.lines.len());

    // Phase 4: Junctions
    let junctions = draw_connection_points(&mut grid, &circuit.connection_points);
    log::debug!("drew {} junctions", junctions);

    // Phase 5: Passives last so traces never hide them
    let passives = draw_passives(&mut grid, &circuit.chips);
    log::debug!("drew {} passives", passives);

    grid
}

/// Render a circuit straight to text.
pub fn render_to_string(circuit: &Circuit, opts: &RenderOptions) -> String {
    render_circuit(circuit, opts).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridschem_core::{Chip, ChipBuilder, ConnectionPoint, Line, NetLabel, Pin, Point, Side};

    /// U1 with four pins, a bent trace to Y, and a resistor on the
    /// lower-right trace.
    fn sample_circuit() -> Circuit {
        let mut c = Circuit::new();
        c.add_chip(ChipBuilder::new("U1").left_pins(2).right_pins(2).build());
        c.add_chip(ChipBuilder::passive("R1").left_pins(1).right_pins(1).at(7.0, 1.0).build());

        c.add_line(Line::from_coords(0.0, 2.0, -4.0, 2.0));
        c.add_net_label(NetLabel::new("X1", -4.0, 2.0));

        c.add_line(Line::from_coords(5.0, 2.0, 8.0, 2.0));
        c.add_net_label(NetLabel::new("W", 8.0, 2.0));

        c.add_line(Line::from_coords(0.0, 1.0, -2.0, 1.0));
        c.add_line(Line::from_coords(-2.0, 1.0, -2.0, -1.0));
        c.add_net_label(NetLabel::new("Y", -2.0, -1.0));

        c.add_line(Line::from_coords(5.0, 1.0, 9.0, 1.0));
        c
    }

    #[test]
    fn test_full_render() {
        let text = render_to_string(&sample_circuit(), &RenderOptions::default());
        let expected = [
            "    U1",
            "    ┌───┐",
            "X───┤1 4├───W",
            "  ┌─┤2 3├[R1]─",
            "  │ └───┘",
            "  Y",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_without_chip_labels() {
        let opts = RenderOptions::default().with_chip_labels(false);
        let grid = render_circuit(&sample_circuit(), &opts);
        assert_eq!(grid.rows()[0], "    ┌───┐");
    }

    #[test]
    fn test_render_with_axis_labels() {
        let opts = RenderOptions::default().with_axis_labels(true);
        let text = render_to_string(&sample_circuit(), &opts);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "         0.0  5.0");
        assert_eq!(lines[1], " 4.0     U1");
        assert_eq!(lines[6], "-1.0   Y");
    }

    #[test]
    fn test_scale_invariance() {
        let k = 2.0;
        let mut scaled = sample_circuit();
        for chip in &mut scaled.chips {
            chip.x /= k;
            chip.y /= k;
            chip.width /= k;
            chip.height /= k;
            for pin in &mut chip.pins {
                pin.offset /= k;
            }
        }
        for line in &mut scaled.lines {
            line.start = Point::new(line.start.x / k, line.start.y / k);
            line.end = Point::new(line.end.x / k, line.end.y / k);
        }
        for label in &mut scaled.net_labels {
            label.position = Point::new(label.position.x / k, label.position.y / k);
        }

        let unit = render_to_string(&sample_circuit(), &RenderOptions::default());
        let fine = render_to_string(&scaled, &RenderOptions::default().with_scale(k, k));
        assert_eq!(unit, fine);
    }

    #[test]
    fn test_junction_beats_wire_and_passive_beats_junction() {
        let mut c = Circuit::new();
        c.add_line(Line::from_coords(0.0, 0.0, 6.0, 0.0));
        c.add_line(Line::from_coords(3.0, 0.0, 3.0, 2.0));
        c.add_connection_point(ConnectionPoint::new(3.0, 0.0, true));
        c.add_connection_point(ConnectionPoint::new(0.0, 0.0, false));
        let text = render_to_string(&c, &RenderOptions::default());
        assert_eq!(text, "   │\n   │\n───●───");

        c.add_chip(ChipBuilder::passive("R5").left_pins(1).right_pins(1).at(3.0, 0.0).size(3.0, 1.0).build());
        let text = render_to_string(&c, &RenderOptions::default());
        assert_eq!(text, "   │\n   │\n──R5───");
    }

    #[test]
    fn test_label_stays_visible_at_wire_end() {
        // Labels are overlays, so a wire ending on a label leaves it visible.
        let mut c = Circuit::new();
        c.add_net_label(NetLabel::new("X7", 0.0, 0.0));
        c.add_line(Line::from_coords(0.0, 0.0, 3.0, 0.0));
        assert_eq!(render_to_string(&c, &RenderOptions::default()), "X───");
    }

    #[test]
    fn test_neighbouring_chips_do_not_corrupt_each_other() {
        let mut c = Circuit::new();
        c.add_chip(ChipBuilder::new("U1").left_pins(1).build());
        c.add_chip(ChipBuilder::new("U2").right_pins(1).at(5.0, 0.0).build());
        assert!(c.overlapping_chips().is_empty());

        let opts = RenderOptions::default().with_chip_labels(false);
        let grid = render_circuit(&c, &opts);
        assert_eq!(grid.rows(), vec!["┌───┐┌───┐", "┤1  ││  1├", "└───┘└───┘"]);
    }

    #[test]
    fn test_overlapping_chips_still_render() {
        let mut c = Circuit::new();
        c.add_chip(Chip::new("U1", 0.0, 0.0, 4.0, 3.0).with_pin(Pin::new(1, Side::Left, 1.0)));
        c.add_chip(Chip::new("U2", 2.0, 0.0, 4.0, 3.0));
        let grid = render_circuit(&c, &RenderOptions::default().with_chip_labels(false));
        assert_eq!(grid.rows(), vec!["┌─┌──┐", "┤1│  │", "└─└──┘"]);
    }

    #[test]
    fn test_pathological_inputs_do_not_panic() {
        // A zero scale collapses every coordinate into one cell.
        let collapsed = render_to_string(&sample_circuit(), &RenderOptions::default().with_scale(0.0, 0.0));
        assert_eq!(collapsed.lines().count(), 1);

        let mut c = Circuit::new();
        c.add_chip(Chip::new("U9", 0.0, 0.0, -4.0, -3.0).with_pin(Pin::new(1, Side::Left, 1.0)));
        c.add_chip(Chip::new("R9", 5.0, 5.0, -4.0, -1.0).passive().with_pin(Pin::new(1, Side::Left, 0.0)));
        let text = render_to_string(&c, &RenderOptions::default());
        assert_eq!(text, "U9");
    }

    #[test]
    fn test_empty_circuit() {
        assert_eq!(render_to_string(&Circuit::new(), &RenderOptions::default()), "");
    }
}
