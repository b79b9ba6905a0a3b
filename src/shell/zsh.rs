//! Zsh adapter: `%{`/`%}` zero-width markers and a precmd hook.

use super::wrap_control_runs;

pub(crate) fn escape(prompt: &str) -> String {
    wrap_control_runs(prompt, "%{", "%}")
}

/// Evaluated once per session: `eval "$(workspace-prompt init zsh)"`
pub(crate) const INIT_SCRIPT: &str = r#"# workspace-prompt zsh integration
if [ -z "${WORKSPACE_PROMPT_ROOT:-}" ]; then
    export WORKSPACE_PROMPT_ROOT="$PWD"
fi

__workspace_prompt_render() {
    PROMPT="$(workspace-prompt render --shell zsh --width "${COLUMNS:-80}")"
}

typeset -ga precmd_functions
if [[ -z "${precmd_functions[(r)__workspace_prompt_render]}" ]]; then
    precmd_functions+=(__workspace_prompt_render)
fi
"#;
