//! Char-indexed editing primitives for the query line. Cursors count
//! characters, not bytes, so multi-byte input stays safe.

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = clamp_cursor(*cursor, value);
    let byte_pos = byte_index_at_char(value, pos);
    value.insert(byte_pos, ch);
    *cursor = pos + 1;
}

pub fn backspace_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos - 1);
    value.remove(byte_pos);
    *cursor = pos - 1;
    true
}

pub fn delete_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos);
    value.remove(byte_pos);
    *cursor = pos;
    true
}

pub fn move_left(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    *cursor = pos - 1;
    true
}

pub fn move_right(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    *cursor = pos + 1;
    true
}

fn byte_index_at_char(value: &str, char_pos: usize) -> usize {
    value
        .char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_track_char_positions() {
        let mut value = String::from("Lndon");
        let mut cursor = 1;
        insert_char(&mut value, &mut cursor, 'o');
        assert_eq!(value, "London");
        assert_eq!(cursor, 2);

        assert!(backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "Lndon");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn multibyte_input_is_char_indexed() {
        let mut value = String::from("Zrich");
        let mut cursor = 1;
        insert_char(&mut value, &mut cursor, 'ü');
        assert_eq!(value, "Zürich");

        cursor = char_count(&value);
        assert!(backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "Züric");
    }

    #[test]
    fn delete_removes_under_cursor_and_stops_at_end() {
        let mut value = String::from("Oslo");
        let mut cursor = 4;
        assert!(!delete_char(&mut value, &mut cursor));
        cursor = 0;
        assert!(delete_char(&mut value, &mut cursor));
        assert_eq!(value, "slo");
    }

    #[test]
    fn cursor_moves_clamp_at_both_ends() {
        let value = "Rio";
        let mut cursor = 0;
        assert!(!move_left(&mut cursor, value));
        assert!(move_right(&mut cursor, value));
        cursor = 3;
        assert!(!move_right(&mut cursor, value));
    }
}
