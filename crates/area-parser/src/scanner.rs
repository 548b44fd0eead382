//! Block scanner for area files.
//!
//! Two states:
//!
//! | state      | line                          | next state | output       |
//! |------------|-------------------------------|------------|--------------|
//! | `Scanning` | contains `REGION`, id wanted  | `InBlock`  | -            |
//! | `Scanning` | anything else                 | `Scanning` | -            |
//! | `InBlock`  | contains `};`                 | `Scanning` | finished block |
//! | `InBlock`  | anything else                 | `InBlock`  | line appended |

/// A block's id and its raw body lines, before any tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaBlockRaw {
    pub id: String,
    pub content_lines: Vec<String>,
}

impl AreaBlockRaw {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_lines: Vec::new(),
        }
    }
}

const REGION_MARKER: &str = "REGION";
const BLOCK_TERMINATOR: &str = "};";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Scanning,
    InBlock(AreaBlockRaw),
}

impl ScanState {
    /// Apply one line. Returns the next state and, when the line closes a
    /// block, the finished block.
    ///
    /// `wanted` decides whether a block with the given id is collected;
    /// unwanted blocks are passed over while still `Scanning`.
    pub fn transition(self, line: &str, wanted: impl Fn(&str) -> bool) -> (ScanState, Option<AreaBlockRaw>) {
        match self {
            ScanState::Scanning => match region_id(line) {
                Some(id) if wanted(&id) => (ScanState::InBlock(AreaBlockRaw::new(id)), None),
                _ => (ScanState::Scanning, None),
            },
            ScanState::InBlock(block) if line.contains(BLOCK_TERMINATOR) => {
                (ScanState::Scanning, Some(block))
            }
            ScanState::InBlock(mut block) => {
                block.content_lines.push(line.to_string());
                (ScanState::InBlock(block), None)
            }
        }
    }
}

/// Block id of a `REGION: <id> {` header line, or `None` for other lines.
pub fn region_id(line: &str) -> Option<String> {
    if !line.contains(REGION_MARKER) {
        return None;
    }
    let id = line
        .replace("REGION:", "")
        .replace('{', "")
        .trim_matches(|c: char| c.is_whitespace() || c == '{' || c == '}')
        .to_string();
    Some(id)
}

/// Drives [`ScanState`] over a sequence of lines.
#[derive(Debug, Default)]
pub struct BlockScanner {
    state: ScanState,
}

impl BlockScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line, returning a block if the line completed one.
    pub fn feed(&mut self, line: &str, wanted: impl Fn(&str) -> bool) -> Option<AreaBlockRaw> {
        let (next, done) = std::mem::take(&mut self.state).transition(line, wanted);
        self.state = next;
        done
    }

    /// End of input. Returns the block still open, if any; it has no
    /// terminator and is not a complete block.
    pub fn finish(self) -> Option<AreaBlockRaw> {
        match self.state {
            ScanState::Scanning => None,
            ScanState::InBlock(block) => Some(block),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(_: &str) -> bool {
        true
    }

    #[test]
    fn test_region_id_extraction() {
        assert_eq!(region_id("REGION: euro4 {"), Some("euro4".to_string()));
        assert_eq!(region_id("REGION:euro4{"), Some("euro4".to_string()));
        assert_eq!(region_id("  REGION:   ease_sh   {  "), Some("ease_sh".to_string()));
        assert_eq!(region_id("  NAME: Europe"), None);
    }

    #[test]
    fn test_scanning_enters_block_on_wanted_header() {
        let (state, done) = ScanState::Scanning.transition("REGION: a {", all);
        assert_eq!(state, ScanState::InBlock(AreaBlockRaw::new("a")));
        assert!(done.is_none());
    }

    #[test]
    fn test_scanning_skips_unwanted_header() {
        let (state, done) = ScanState::Scanning.transition("REGION: a {", |id| id == "b");
        assert_eq!(state, ScanState::Scanning);
        assert!(done.is_none());
    }

    #[test]
    fn test_scanning_ignores_other_lines() {
        let (state, _) = ScanState::Scanning.transition("  NAME: stray", all);
        assert_eq!(state, ScanState::Scanning);
        let (state, _) = ScanState::Scanning.transition("};", all);
        assert_eq!(state, ScanState::Scanning);
    }

    #[test]
    fn test_in_block_appends_and_terminates() {
        let state = ScanState::InBlock(AreaBlockRaw::new("a"));
        let (state, done) = state.transition("  XSIZE: 10", all);
        assert!(done.is_none());
        let (state, done) = state.transition("};", all);
        assert_eq!(state, ScanState::Scanning);
        let block = done.unwrap();
        assert_eq!(block.id, "a");
        assert_eq!(block.content_lines, vec!["  XSIZE: 10".to_string()]);
    }

    #[test]
    fn test_header_inside_block_is_content() {
        let state = ScanState::InBlock(AreaBlockRaw::new("a"));
        let (state, _) = state.transition("REGION: b {", all);
        match state {
            ScanState::InBlock(block) => {
                assert_eq!(block.id, "a");
                assert_eq!(block.content_lines, vec!["REGION: b {".to_string()]);
            }
            other => panic!("expected InBlock, got {:?}", other),
        }
    }

    #[test]
    fn test_scanner_reports_unterminated_block() {
        let mut scanner = BlockScanner::new();
        assert!(scanner.feed("REGION: open {", all).is_none());
        assert!(scanner.feed("  NAME: never closed", all).is_none());
        let open = scanner.finish().unwrap();
        assert_eq!(open.id, "open");
        assert_eq!(open.content_lines.len(), 1);
    }
}
