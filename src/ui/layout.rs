use ratatui::layout::Rect;

/// Split the screen top to bottom: header, item list, input box, key hints.
///
/// On undersized terminals the input box keeps its rows before the list does.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(2);
    let remaining = area.height.saturating_sub(header_height);
    let input_height = remaining.min(3);
    let remaining = remaining.saturating_sub(input_height);
    let hints_height = remaining.min(1);
    let list_height = remaining.saturating_sub(hints_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let list = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: list_height,
    };
    let input = Rect {
        x: area.x,
        y: area.y + header_height + list_height,
        width: area.width,
        height: input_height,
    };
    let hints = Rect {
        x: area.x,
        y: area.y + header_height + list_height + input_height,
        width: area.width,
        height: hints_height,
    };
    (header, list, input, hints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, list, input, hints) = layout_regions(area);

        assert_eq!(header.height + list.height + input.height + hints.height, 24);
        assert_eq!(list.y, header.y + header.height);
        assert_eq!(input.y, list.y + list.height);
        assert_eq!(hints.y, input.y + input.height);
        for region in [header, list, input, hints] {
            assert_eq!(region.width, 80);
        }
    }

    #[test]
    fn zero_sized_area_is_safe() {
        let (header, list, input, hints) = layout_regions(Rect::new(0, 0, 0, 0));
        assert_eq!(header.height, 0);
        assert_eq!(list.height, 0);
        assert_eq!(input.height, 0);
        assert_eq!(hints.height, 0);
    }

    #[test]
    fn input_box_survives_tiny_terminals() {
        let (_, list, input, _) = layout_regions(Rect::new(0, 0, 40, 5));
        assert_eq!(input.height, 3);
        assert_eq!(list.height, 0);
    }
}
