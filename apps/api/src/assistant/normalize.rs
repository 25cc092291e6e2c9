//! Response normalizer: re-merges one-item-per-line lists (usually skills)
//! that the model emits despite being told to use commas.
//!
//! Line-based scan with lookahead:
//! - A short line with a space (< 45 chars, not a bullet or heading) is a header and
//!   is emitted as-is. This check runs first, so such a line never starts a merge.
//! - Any other short comma-free line (< 55 chars, not a bullet or heading) may start
//!   a run. Following lines join the run while they are non-empty, comma-free,
//!   shorter than 55 chars, and not a bullet or heading.
//! - Runs of 3 or more lines collapse into one comma-separated line. Shorter runs
//!   leave the starting line untouched and scanning resumes on the next line.

const HEADER_MAX_CHARS: usize = 45;
// Strict bound for continuation lines too: a 55-char line ends a run.
const ITEM_MAX_CHARS: usize = 55;
const MIN_RUN: usize = 3;

fn is_marked(line: &str) -> bool {
    line.starts_with(['-', '*', '#'])
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn is_header(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && trimmed.contains(' ')
        && char_len(trimmed) < HEADER_MAX_CHARS
        && !is_marked(trimmed)
}

fn is_single_item(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && !is_marked(trimmed)
        && !trimmed.contains(',')
        && char_len(trimmed) < ITEM_MAX_CHARS
}

/// Collapses runs of 3+ short single-item lines into comma-separated lines.
pub fn collapse_skill_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if is_header(trimmed) {
            out.push(line.to_string());
            i += 1;
            continue;
        }

        if is_single_item(trimmed) {
            let mut run = vec![trimmed];
            let mut j = i + 1;
            while j < lines.len() {
                let next = lines[j].trim();
                if !is_single_item(next) {
                    break;
                }
                run.push(next);
                j += 1;
            }

            if run.len() >= MIN_RUN {
                out.push(run.join(", "));
                i = j;
                continue;
            }
        }

        out.push(line.to_string());
        i += 1;
    }

    out.join("\n")
}
