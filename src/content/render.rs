use super::catalog::{MODULES, Module};
use super::code_blocks;

pub fn print_module_list() {
    println!("Course modules:");
    println!("*Hint - use `csharp-trainer show <module>`\n");
    for module in MODULES {
        println!("- {} — {}", module.key, module.title);
    }
}

pub fn print_module(module: &Module) {
    println!("== {} ==\n", module.title);
    for section in module.sections {
        println!("-- {} --", section.heading);
        println!("{}", section.body.trim_end());
        println!();
    }
}

/// Numbered listing of the runnable snippets embedded in a module.
pub fn print_snippets(module: &Module) {
    let blocks = code_blocks(module);
    if blocks.is_empty() {
        println!("Module `{}` has no runnable snippets.", module.key);
        return;
    }
    println!("Runnable snippets in `{}`:", module.key);
    println!(
        "*Hint - use `csharp-trainer run --module {} --index <n>`\n",
        module.key
    );
    for (index, block) in blocks.iter().enumerate() {
        println!("[{index}]");
        println!("```csharp\n{}\n```", block.trim_end());
        println!();
    }
}
