use std::io::{BufRead, Write};

use log::debug;

/// One of the three actions the menu knows how to dispatch.
#[derive(Debug, PartialEq, Eq)]
enum MenuChoice {
    /// Prompt for both lists, replacing whatever was stored before.
    EnterLists,
    /// Compare the stored lists and print the verdict.
    Compare,
    /// Leave the menu loop.
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::EnterLists),
            "2" => Some(Self::Compare),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Holds the two user-entered lists and compares them as whole strings.
///
/// Despite the name there is no character- or word-level diff: each list
/// is joined with single spaces and the joined strings are checked for
/// exact, case-sensitive equality.
#[derive(Debug)]
pub struct TextDiffHighlighter {
    list1: Vec<String>,
    list2: Vec<String>,

    /// Reserved for word-level matching. Nothing reads this yet.
    #[allow(dead_code)]
    word_match_mode: bool,

    /// Token boundaries for `word_match_mode`. Also unread.
    #[allow(dead_code)]
    delimiters: String,
}

impl Default for TextDiffHighlighter {
    fn default() -> Self {
        Self {
            list1: Vec::new(),
            list2: Vec::new(),
            word_match_mode: true,
            delimiters: "?! .,\"'/\\:;".to_owned(),
        }
    }
}

impl TextDiffHighlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompts for both lists in order, overwriting the stored values.
    pub fn start_getting_input<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> eyre::Result<()> {
        writeln!(output, "Enter value for List 1:")?;
        self.list1 = collect_list(input, output, 1)?;

        writeln!(output, "\nEnter value for List 2:")?;
        self.list2 = collect_list(input, output, 2)?;

        Ok(())
    }

    /// Compares the joined lists and prints one of the two verdicts.
    ///
    /// When the lists differ only List 1 is echoed back; List 2 stays
    /// hidden. That asymmetry is part of the interface.
    pub fn highlight_differences<W: Write>(&self, output: &mut W) -> eyre::Result<()> {
        if self.list1.is_empty() || self.list2.is_empty() {
            writeln!(output, "Error: Both lists must have value first!")?;
            return Ok(());
        }

        writeln!(output, "\n{}", "=".repeat(60))?;
        writeln!(output, "COMPARING TWO LISTS")?;
        writeln!(output, "{}", "=".repeat(60))?;

        let text1 = self.list1.join(" ");
        let text2 = self.list2.join(" ");

        writeln!(output, "List 1: {text1}")?;

        if text1 == text2 {
            writeln!(output, "List 2: {text2}")?;
            writeln!(output, "Result: LISTS ARE IDENTICAL ✓")?;
        } else {
            writeln!(output, "Result: LISTS ARE DIFFERENT ✗")?;
        }

        Ok(())
    }
}

/// Reads one entry for list `list_number`.
///
/// An empty line (or exhausted input) leaves the list empty and prints a
/// nudge instead. A non-empty line is stored verbatim, untrimmed and
/// unsplit.
fn collect_list<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    list_number: usize,
) -> eyre::Result<Vec<String>> {
    write!(output, "List {list_number}: ")?;
    output.flush()?;

    let mut items = Vec::new();
    match read_line(input)? {
        Some(item) if !item.is_empty() => items.push(item),
        _ => writeln!(output, "Please enter at least one character.")?,
    }
    Ok(items)
}

/// Reads one line without its trailing newline. `None` once the input is
/// exhausted.
fn read_line<R: BufRead>(input: &mut R) -> eyre::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Runs the interactive menu until the user picks "3" or input runs out.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> eyre::Result<()> {
    writeln!(output, "{}", "=".repeat(50))?;
    writeln!(output, "TEXTDIFF HIGHLIGHTER")?;
    writeln!(output, "Compare two lists of text items")?;
    writeln!(output, "{}", "=".repeat(50))?;

    let mut highlighter = TextDiffHighlighter::new();

    loop {
        writeln!(output, "\nOptions:")?;
        writeln!(output, "1. Enter lists manually")?;
        writeln!(output, "2. Compare and highlight differences")?;
        writeln!(output, "3. Exit")?;

        // The prompt advertises 1-5 but only 1-3 are wired up; the text is
        // kept as-is.
        write!(output, "\nEnter your choice (1-5): ")?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            debug!("input exhausted, leaving menu");
            break;
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::EnterLists) => {
                debug!("entering lists");
                highlighter.start_getting_input(input, output)?;
            }
            Some(MenuChoice::Compare) => {
                debug!("comparing lists");
                highlighter.highlight_differences(output)?;
            }
            Some(MenuChoice::Exit) => {
                writeln!(output, "Thank you for using TextDiff Highlighter!")?;
                break;
            }
            None => {
                debug!("unrecognized choice {choice:?}");
                writeln!(output, "Invalid choice. Please try again.")?;
            }
        }
    }

    Ok(())
}
