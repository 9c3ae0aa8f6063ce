//! Message template shown above the typing prompt.
//!
//! The head comes from the info worksheet; the common prompt block with the
//! item counter and the proverb is always appended below it.

/// Prompt block appended to every template
const COMMON_PROMPT: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\n\nType the following proverb exactly ({current_num}/{total_num}):\n\n'{proverb}'";

/// Encouragement used when the info worksheet has no message row
const FALLBACK_HEAD: &str = "The typing you practice today\nwill one day shine as fast, accurate keystrokes.\n\nPractice a little every day\nand the computer will do whatever you tell it to.\n\nEven when it is hard, we are in this together!";

/// Quiz prompt template with `{current_num}`, `{total_num}` and `{proverb}`
/// placeholders.
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    text: String,
}

impl MessageTemplate {
    /// Build a template from the head fetched from the info worksheet
    pub fn from_remote_head(head: &str) -> Self {
        Self {
            text: format!("{}\n\n{}", head.trim(), COMMON_PROMPT),
        }
    }

    /// Render the prompt for one quiz item
    pub fn render(&self, current_num: usize, total_num: usize, proverb: &str) -> String {
        self.text
            .replace("{current_num}", &current_num.to_string())
            .replace("{total_num}", &total_num.to_string())
            .replace("{proverb}", proverb)
    }
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::from_remote_head(FALLBACK_HEAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_placeholders() {
        let template = MessageTemplate::from_remote_head("Good morning!");
        let rendered = template.render(3, 10, "look before you leap");
        assert!(rendered.starts_with("Good morning!"));
        assert!(rendered.contains("(3/10)"));
        assert!(rendered.contains("'look before you leap'"));
        assert!(!rendered.contains("{proverb}"));
    }

    #[test]
    fn default_template_carries_the_common_prompt() {
        let rendered = MessageTemplate::default().render(1, 1, "x");
        assert!(rendered.contains("(1/1)"));
        assert!(rendered.contains("'x'"));
    }

    #[test]
    fn remote_head_is_trimmed() {
        let template = MessageTemplate::from_remote_head("  hello \n");
        assert!(template.render(1, 2, "y").starts_with("hello"));
    }
}
