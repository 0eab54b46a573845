//! Verification prompt rendering

use std::collections::BTreeMap;
use std::fmt::Write;

/// Render the evaluation prompt embedding the specification and each file.
///
/// Files appear in path order. Contents are embedded verbatim; a file that
/// itself contains a triple-backtick fence makes the rendered prompt
/// structurally ambiguous, which is an accepted limitation.
pub fn build_verification_prompt(
    spec_content: &str,
    code_contents: &BTreeMap<String, String>,
) -> String {
    let mut code_section = String::new();
    for (file_path, content) in code_contents {
        // write! to a String cannot fail
        let _ = write!(code_section, "\n### {file_path}\n```\n{content}\n```\n");
    }

    format!(
        r#"You are an expert code reviewer. Compare the SPEC (specification document) below with the actual code and evaluate how closely they match.

## SPEC
{spec_content}

## Actual code
{code_section}
## Evaluation criteria
Evaluate the following aspects:
1. Screen composition: are the elements described in the SPEC present in the code?
2. State management: are the states and hooks described in the SPEC in use?
3. Processing flow: is the processing flow described in the SPEC implemented?
4. Validation: are the validation rules described in the SPEC implemented?
5. Error handling: are the error cases described in the SPEC handled?

## Output format
Respond in the following JSON format:
```json
{{
  "matchPercentage": <number between 0 and 100>,
  "matchedItems": ["matched item 1", "matched item 2", ...],
  "unmatchedItems": ["unmatched item 1", "unmatched item 2", ...],
  "notes": "supplementary comments (unimplemented features, improvements, etc.)"
}}
```

Output only the JSON."#
    )
}
