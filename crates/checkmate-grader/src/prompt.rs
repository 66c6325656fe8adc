//! LLM prompt construction for extraction and analysis

use checkmate_domain::RequirementList;

/// Builds the prompt asking the model to list an assignment's requirements
pub struct RequirementPrompt<'a> {
    text: &'a str,
}

impl<'a> RequirementPrompt<'a> {
    /// Create a new prompt builder for the raw requirement text
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(REQUIREMENT_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Text:\n");
        prompt.push_str(self.text);
        prompt.push_str("\n\n");

        prompt.push_str(REQUIREMENT_FORMAT_REMINDER);

        prompt
    }
}

/// Builds the prompt asking the model to grade a submission
pub struct AnalysisPrompt<'a> {
    requirements: &'a RequirementList,
    submission: &'a str,
}

impl<'a> AnalysisPrompt<'a> {
    /// Create a new prompt builder
    pub fn new(requirements: &'a RequirementList, submission: &'a str) -> Self {
        Self {
            requirements,
            submission,
        }
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Task
        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Numbered requirements
        prompt.push_str("Requirements:\n");
        prompt.push_str(&self.requirements.numbered());
        prompt.push_str("\n\n");

        // 3. The work being graded
        prompt.push_str("Submission:\n");
        prompt.push_str(self.submission);
        prompt.push_str("\n\n");

        // 4. Output schema
        prompt.push_str(ANALYSIS_SCHEMA);

        prompt
    }
}

const REQUIREMENT_INSTRUCTIONS: &str = "Extract the requirements of the assignment from the following text.
Split each requirement into a separate item and return them as a list.";

const REQUIREMENT_FORMAT_REMINDER: &str = "Return the requirements as a JSON array of strings:";

const ANALYSIS_INSTRUCTIONS: &str =
    "Analyze the following assignment requirements and the submitted work.";

const ANALYSIS_SCHEMA: &str = r#"Return the analysis as JSON in exactly this shape:
{
    "overall_score": 0-100,
    "requirements_analysis": [
        {
            "requirement": "requirement text",
            "satisfied": true/false,
            "score": 0-100,
            "feedback": "specific feedback",
            "suggestions": ["suggestion 1", "suggestion 2"]
        }
    ],
    "general_feedback": "overall feedback",
    "improvement_suggestions": ["overall suggestion 1", "overall suggestion 2"]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_prompt_includes_text() {
        let prompt = RequirementPrompt::new("At least 3 pages\nCite 5 sources").build();
        assert!(prompt.contains("At least 3 pages\nCite 5 sources"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_analysis_prompt_numbers_requirements() {
        let requirements = RequirementList::new(vec![
            "At least 3 pages".to_string(),
            "Cite 5 sources".to_string(),
        ]);
        let prompt = AnalysisPrompt::new(&requirements, "My essay").build();

        assert!(prompt.contains("1. At least 3 pages\n2. Cite 5 sources"));
        assert!(prompt.contains("Submission:\nMy essay"));
    }

    #[test]
    fn test_analysis_prompt_includes_schema() {
        let requirements = RequirementList::new(vec!["x".to_string()]);
        let prompt = AnalysisPrompt::new(&requirements, "y").build();

        for field in [
            "overall_score",
            "requirements_analysis",
            "satisfied",
            "suggestions",
            "general_feedback",
            "improvement_suggestions",
        ] {
            assert!(prompt.contains(field), "missing {}", field);
        }
    }
}
