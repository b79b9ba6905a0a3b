//! Bash adapter: `\[`/`\]` zero-width markers and a PROMPT_COMMAND hook.

use super::wrap_control_runs;

pub(crate) fn escape(prompt: &str) -> String {
    wrap_control_runs(prompt, "\\[", "\\]")
}

/// Evaluated once per session: `eval "$(workspace-prompt init bash)"`
pub(crate) const INIT_SCRIPT: &str = r#"# workspace-prompt bash integration
if [ -z "${WORKSPACE_PROMPT_ROOT:-}" ]; then
    export WORKSPACE_PROMPT_ROOT="$PWD"
fi

__workspace_prompt_render() {
    PS1="$(workspace-prompt render --shell bash --width "${COLUMNS:-80}")"
}

case ";${PROMPT_COMMAND:-};" in
    *";__workspace_prompt_render;"*) ;;
    *) PROMPT_COMMAND="__workspace_prompt_render${PROMPT_COMMAND:+;$PROMPT_COMMAND}" ;;
esac
"#;
