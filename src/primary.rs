//! Primary module emission.

/// Wrap the project text in a module whose default export is the runtime
/// wrapper built from it.
///
/// The text is embedded byte for byte; a JSON document is already a valid
/// expression.
pub fn emit_primary_module(source_text: &str, runtime_package: &str) -> String {
    format!(
        "import {{Ldtk}} from '{}';export default new Ldtk({});",
        runtime_package, source_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RUNTIME_PACKAGE;

    #[test]
    fn test_emit_primary_module() {
        let module = emit_primary_module(r#"{"levels":[]}"#, DEFAULT_RUNTIME_PACKAGE);
        assert_eq!(
            module,
            r#"import {Ldtk} from '@theatrejs/plugin-ldtk';export default new Ldtk({"levels":[]});"#
        );
    }

    #[test]
    fn test_source_text_is_not_reformatted() {
        let text = "{\n  \"defs\" : {},\n  \"levels\": []\n}\n";
        let module = emit_primary_module(text, "runtime");
        assert!(module.contains(text));
        assert!(module.starts_with("import {Ldtk} from 'runtime';"));
        assert!(module.ends_with("\n);"));
    }
}
