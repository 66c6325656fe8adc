//! Integration tests for the grading pipeline

#[cfg(test)]
mod tests {
    use crate::{
        AnalysisOutcome, AnalysisPrompt, GraderConfig, GraderError, GradingPipeline,
        RequirementPrompt, ResultSummary, ScoreBand, format_report,
    };
    use checkmate_domain::{RequirementList, Session};
    use checkmate_llm::MockProvider;

    const REQUIREMENT_TEXT: &str = "1. At least 3 pages\n2. Cite 5 sources";
    const SUBMISSION: &str = "An essay about rivers.";

    fn session() -> Session {
        let mut session = Session::with_api_key("test-key");
        session.set_requirements_text(REQUIREMENT_TEXT);
        session.set_submission_text(SUBMISSION);
        session
    }

    fn extracted() -> RequirementList {
        RequirementList::new(vec![
            "At least 3 pages".to_string(),
            "Cite 5 sources".to_string(),
        ])
    }

    /// Mock that answers the extraction prompt with a JSON array and the
    /// analysis prompt with `analysis_response`
    fn scripted(analysis_response: &str) -> MockProvider {
        let mut llm = MockProvider::new("unexpected prompt");
        llm.add_response(
            RequirementPrompt::new(REQUIREMENT_TEXT).build(),
            r#"["At least 3 pages", "Cite 5 sources"]"#,
        );
        llm.add_response(
            AnalysisPrompt::new(&extracted(), SUBMISSION).build(),
            analysis_response,
        );
        llm
    }

    #[tokio::test]
    async fn test_full_grading_flow() {
        let llm = scripted(
            r#"{
                "overall_score": 82,
                "requirements_analysis": [
                    {"requirement": "At least 3 pages", "satisfied": true, "score": 95, "feedback": "4 pages", "suggestions": []},
                    {"requirement": "Cite 5 sources", "satisfied": false, "score": 60, "feedback": "3 sources", "suggestions": ["Add 2 sources"]}
                ],
                "general_feedback": "Well written",
                "improvement_suggestions": ["Add citations"]
            }"#,
        );
        let pipeline = GradingPipeline::new(llm.clone(), GraderConfig::default());
        let mut session = session();

        let outcome = pipeline.run(&mut session).await.unwrap();

        assert!(outcome.is_graded());
        assert_eq!(llm.call_count(), 2);
        assert_eq!(session.requirements(), Some(&extracted()));
        assert_eq!(session.analysis().map(|a| a.overall_score), Some(82));

        let report = session.report().unwrap();
        assert_eq!(report, format_report(outcome.result()));
        assert!(report.contains("### 2. Cite 5 sources"));

        let summary = ResultSummary::new(outcome.result(), &extracted());
        assert_eq!(summary.band, ScoreBand::Excellent);
        assert_eq!(summary.satisfied, 1);
    }

    #[tokio::test]
    async fn test_unparseable_analysis_uses_placeholders() {
        let pipeline = GradingPipeline::new(
            scripted("The essay meets most requirements."),
            GraderConfig::default(),
        );
        let mut session = session();

        match pipeline.run(&mut session).await.unwrap() {
            AnalysisOutcome::Unparsed(result) => {
                assert_eq!(result.overall_score, 70);
                assert_eq!(result.requirements_analysis.len(), 2);
                assert!(result.requirements_analysis.iter().all(|a| a.satisfied && a.score == 70));
            }
            other => panic!("Expected Unparsed, got {:?}", other),
        }
        assert!(session.report().unwrap().contains("### 1. At least 3 pages"));
    }

    #[tokio::test]
    async fn test_unreachable_model_stops_at_extraction() {
        let llm = MockProvider::failing();
        let pipeline = GradingPipeline::new(llm.clone(), GraderConfig::default());
        let mut session = session();

        let result = pipeline.run(&mut session).await;

        assert!(matches!(result, Err(GraderError::NoRequirements)));
        assert_eq!(llm.call_count(), 1);
        assert!(session.analysis().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_during_analysis() {
        let mut llm = scripted("unused");
        llm.add_error(AnalysisPrompt::new(&extracted(), SUBMISSION).build());
        let pipeline = GradingPipeline::new(llm, GraderConfig::default());
        let mut session = session();

        let outcome = pipeline.run(&mut session).await.unwrap();

        assert!(matches!(outcome, AnalysisOutcome::Unreachable(_)));
        assert_eq!(outcome.result().overall_score, 0);
        assert!(outcome.result().requirements_analysis.is_empty());
        assert!(session.report().unwrap().contains("An error occurred during analysis."));
    }

    #[tokio::test]
    async fn test_missing_input_makes_no_call() {
        let llm = MockProvider::new("[]");
        let pipeline = GradingPipeline::new(llm.clone(), GraderConfig::default());

        let mut session = Session::with_api_key("key");
        session.set_requirements_text(REQUIREMENT_TEXT);
        session.set_submission_text("   ");

        let result = pipeline.run(&mut session).await;
        assert!(matches!(result, Err(GraderError::MissingInput(_))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_api_key_makes_no_call() {
        let llm = MockProvider::new("[]");
        let pipeline = GradingPipeline::new(llm.clone(), GraderConfig::default());

        let mut session = Session::new();
        session.set_requirements_text(REQUIREMENT_TEXT);
        session.set_submission_text(SUBMISSION);

        let result = pipeline.run(&mut session).await;
        assert!(matches!(result, Err(GraderError::MissingApiKey)));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_text_length_limit() {
        let llm = MockProvider::new("[]");
        let config = GraderConfig {
            max_text_length: Some(10),
            ..GraderConfig::default()
        };
        let pipeline = GradingPipeline::new(llm.clone(), config);
        let mut session = session();

        let result = pipeline.run(&mut session).await;
        assert!(matches!(result, Err(GraderError::TextTooLong(_, 10))));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_long_inputs_graded_by_default() {
        let long_submission = "word ".repeat(20_000);
        let mut llm = scripted("unused");
        llm.add_response(
            AnalysisPrompt::new(&extracted(), &long_submission).build(),
            r#"{"overall_score": 90}"#,
        );
        let pipeline = GradingPipeline::new(llm.clone(), GraderConfig::default());

        let mut session = Session::with_api_key("test-key");
        session.set_requirements_text(REQUIREMENT_TEXT);
        session.set_submission_text(&long_submission);

        let outcome = pipeline.run(&mut session).await.unwrap();
        assert!(outcome.is_graded());
        assert_eq!(outcome.result().overall_score, 90);
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_heuristic_requirements_feed_analysis() {
        let mut llm = MockProvider::new("not json either");
        llm.add_response(
            RequirementPrompt::new(REQUIREMENT_TEXT).build(),
            "- At least 3 pages\n- Cite 5 sources\n",
        );
        let pipeline = GradingPipeline::new(llm, GraderConfig::default());
        let mut session = session();

        let outcome = pipeline.run(&mut session).await.unwrap();

        assert_eq!(session.requirements(), Some(&extracted()));
        assert_eq!(outcome.result().requirements_analysis.len(), 2);
    }

    #[tokio::test]
    async fn test_fenced_json_with_unwrapping_enabled() {
        let mut llm = MockProvider::new("```json\n{\"overall_score\": 55}\n```");
        llm.add_response(
            RequirementPrompt::new(REQUIREMENT_TEXT).build(),
            "```json\n[\"At least 3 pages\", \"Cite 5 sources\"]\n```",
        );
        let config = GraderConfig {
            unwrap_code_fences: true,
            ..GraderConfig::default()
        };
        let pipeline = GradingPipeline::new(llm, config);
        let mut session = session();

        let outcome = pipeline.run(&mut session).await.unwrap();

        assert!(outcome.is_graded());
        assert_eq!(outcome.result().overall_score, 55);
        assert_eq!(session.requirements(), Some(&extracted()));
    }
}
