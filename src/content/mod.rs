mod catalog;
mod render;

pub use catalog::{MODULES, Module, Section};
pub use render::{print_module, print_module_list, print_snippets};

/// Module whose completion is recorded by taking the quiz, not by reading.
pub const QUIZ_MODULE_KEY: &str = "quizzes";

/// Look a module up by key or title, case-insensitively.
pub fn find_module(name: &str) -> Option<&'static Module> {
    let needle = name.trim().to_lowercase();
    MODULES
        .iter()
        .find(|module| module.key == needle || module.title.to_lowercase() == needle)
}

/// Embedded ```csharp blocks of a module, in document order.
///
/// Blocks are returned verbatim, ready to hand to the snippet runner.
pub fn code_blocks(module: &Module) -> Vec<String> {
    let mut blocks = Vec::new();
    for section in module.sections {
        let mut in_block = false;
        let mut current = String::new();
        for line in section.body.lines() {
            if line.trim().starts_with("```csharp") {
                in_block = true;
                current.clear();
                continue;
            }
            if line.trim() == "```" && in_block {
                in_block = false;
                blocks.push(current.clone());
                continue;
            }
            if in_block {
                current.push_str(line);
                current.push('\n');
            }
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_over_key_and_title() {
        assert_eq!(find_module("basics").unwrap().title, "C# Basics");
        assert_eq!(find_module("BASICS").unwrap().title, "C# Basics");
        assert_eq!(find_module("c# basics").unwrap().key, "basics");
        assert!(find_module("no-such-module").is_none());
    }

    #[test]
    fn every_module_has_a_distinct_key() {
        let mut keys: Vec<_> = MODULES.iter().map(|m| m.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MODULES.len());
    }

    #[test]
    fn introduction_embeds_the_hello_world_snippet() {
        let module = find_module("introduction").unwrap();
        let blocks = code_blocks(module);

        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("Console.WriteLine(\"Hello, World!\");"));
        // Verbatim extraction keeps the block's own line structure.
        assert!(blocks[0].starts_with("using System;\n"));
        assert!(blocks[0].ends_with("}\n"));
    }

    #[test]
    fn control_structures_section_yields_each_fenced_block() {
        let module = find_module("basics").unwrap();
        let blocks = code_blocks(module);

        // One per fenced example: data types, if, for, foreach, methods.
        assert_eq!(blocks.len(), 5);
        assert!(blocks[2].contains("for (int i = 0; i < 5; i++)"));
    }

    #[test]
    fn prose_only_modules_have_no_snippets() {
        let module = find_module("glossary").unwrap();
        assert!(code_blocks(module).is_empty());
    }
}
