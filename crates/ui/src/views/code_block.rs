use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;

use crate::vm::CodeLineVm;

const COPIED_RESET: Duration = Duration::from_secs(2);

fn copy_script(code: &str) -> String {
    format!("navigator.clipboard.writeText({code:?});")
}

#[component]
pub fn CodeBlock(code: String, lines: Vec<CodeLineVm>) -> Element {
    let mut copied = use_signal(|| false);

    let on_copy = move |_: MouseEvent| {
        let _ = eval(&copy_script(&code));
        copied.set(true);
        spawn(async move {
            tokio::time::sleep(COPIED_RESET).await;
            copied.set(false);
        });
    };

    rsx! {
        div { class: "code-block",
            div { class: "code-block__bar",
                div { class: "code-block__lights",
                    span { class: "light light--red" }
                    span { class: "light light--amber" }
                    span { class: "light light--green" }
                }
                button {
                    class: "code-block__copy",
                    r#type: "button",
                    title: "Copy Code",
                    onclick: on_copy,
                    if copied() { "Copied" } else { "Copy" }
                }
            }
            pre { class: "code-block__body",
                code {
                    for line in lines {
                        div { key: "{line.number}", class: "code-line",
                            span { class: "code-line__number", "{line.number}" }
                            span { class: "code-line__text", "{line.text}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::copy_script;

    #[test]
    fn copy_script_quotes_code_as_a_string_literal() {
        let script = copy_script("printf(\"hi\\n\");\nreturn 0;");
        assert_eq!(
            script,
            r#"navigator.clipboard.writeText("printf(\"hi\\n\");\nreturn 0;");"#
        );
    }
}
