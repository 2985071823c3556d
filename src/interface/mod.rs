pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_breakdown, write_breakdown_csv};
pub use prompts::{
    SessionAction, prompt_action, prompt_ingredient, prompt_line_field, prompt_line_index,
    prompt_new_line, prompt_number, prompt_override_field, prompt_recipe, prompt_text,
    prompt_unit, prompt_yes_no,
};
pub use render::{
    display_cost_table, display_recipe_list, display_summary, format_optional_price,
    format_price, format_quantity,
};
