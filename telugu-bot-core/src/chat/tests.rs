// Resolver tier tests

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::chat::phrases::FOLLOW_UP_QUESTIONS;
    use crate::dataset::{Dataset, DatasetRecord};
    use crate::language::{Language, LanguageDetector};
    use crate::llm::mock::MockGenerator;
    use crate::llm::{Generation, GenerationTask, LLMError};
    use crate::tasks::TRANSLATION_FAILED;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn resolver_with(mock: &MockGenerator) -> ResponseResolver {
        ResponseResolver::builder().generator(Arc::new(mock.clone())).build()
    }

    fn sample_dataset() -> Arc<Dataset> {
        Arc::new(Dataset::new(vec![
            DatasetRecord::new("how are you doing today", "x", "Fine, thanks"),
            DatasetRecord::new("Say hello to a friend", "", "never chosen"),
        ]))
    }

    #[tokio::test]
    async fn test_phrase_reply_is_a_candidate() {
        let resolver = ResponseResolver::builder().build();
        let table = PhraseTable::builtin();
        let candidates = table.lookup("hello").unwrap();

        let mut rng = rng();
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let resolution = resolver.resolve_detailed("Hello!", &mut rng).await;
            assert_eq!(resolution.source, ReplySource::Phrase);
            assert!(candidates.contains(&resolution.reply));
            seen.insert(resolution.reply);
        }
        // uniform choice reaches every candidate
        assert_eq!(seen.len(), candidates.len());
    }

    #[tokio::test]
    async fn test_follow_up_appended_for_hlo() {
        let resolver = ResponseResolver::builder().build();
        let reply = resolver.resolve("hlo", &mut rng()).await;

        let (base, follow_up) = reply.split_once("\n\n").unwrap();
        assert_eq!(base, "హలో! మీకు ఎలా సహాయం చేయగలను?");
        assert!(FOLLOW_UP_QUESTIONS.contains(&follow_up));
    }

    #[tokio::test]
    async fn test_empty_translate_trigger_skips_generator() {
        let mock = MockGenerator::new();
        let resolver = resolver_with(&mock);

        let reply = resolver.resolve("can you translate   ", &mut rng()).await;
        assert_eq!(reply, CommandKind::Translate.instructions());

        let reply = resolver.resolve("సారాంశం ఇవ్వగలవా?", &mut rng()).await;
        assert_eq!(reply, CommandKind::Summarize.instructions());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_translate_trigger_calls_generator_once() {
        let mock = MockGenerator::replying("శుభ రాత్రి");
        let resolver = resolver_with(&mock);

        let resolution = resolver.resolve_detailed("Can you translate good night", &mut rng()).await;
        assert_eq!(resolution.reply, "శుభ రాత్రి");
        assert_eq!(resolution.source, ReplySource::Command);

        let history = mock.call_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].payload, "good night");
        assert_eq!(history[0].source_language, Some(Language::English));
        assert_eq!(history[0].target_language, Some(Language::Telugu));
    }

    #[tokio::test]
    async fn test_telugu_payload_swaps_direction() {
        let mock = MockGenerator::replying("good night");
        let resolver = resolver_with(&mock);

        resolver.resolve("భాష మార్చండి శుభ రాత్రి", &mut rng()).await;
        let history = mock.call_history();
        assert_eq!(history[0].source_language, Some(Language::Telugu));
        assert_eq!(history[0].target_language, Some(Language::English));
    }

    #[tokio::test]
    async fn test_summarize_trigger_calls_generator_once() {
        let mock = MockGenerator::replying("The meeting was long.");
        let resolver = resolver_with(&mock);

        let resolution =
            resolver.resolve_detailed("Can you summarize The Meeting ran long?", &mut rng()).await;
        assert_eq!(resolution.source, ReplySource::Command);
        assert_eq!(resolution.reply, "The meeting was long.");

        let history = mock.call_history();
        assert_eq!(mock.call_count(), 1);
        assert_eq!(history[0].task, GenerationTask::Summarize);
        assert_eq!(history[0].payload, "The Meeting ran long?");
        assert_eq!(history[0].target_language, Some(Language::English));
    }

    #[tokio::test]
    async fn test_translate_payload_keeps_question_mark() {
        let mock = MockGenerator::replying("స్టేషన్ ఎక్కడ ఉంది?");
        let resolver = resolver_with(&mock);

        resolver.resolve("can you translate Where is the station?", &mut rng()).await;
        assert_eq!(mock.call_history()[0].payload, "Where is the station?");
    }

    #[tokio::test]
    async fn test_translate_failure_passes_through_message() {
        let mock = MockGenerator::new();
        mock.add_response(Generation::empty());
        let resolver = resolver_with(&mock);

        let reply = resolver.resolve("can you translate hello there", &mut rng()).await;
        assert_eq!(reply, TRANSLATION_FAILED);
    }

    #[tokio::test]
    async fn test_same_seed_same_reply() {
        let mock = MockGenerator::new();
        let resolver = resolver_with(&mock);

        for input in ["hello", "em chestunnav", "something unknown", "can you summarize this"] {
            let first = resolver.resolve(input, &mut StdRng::seed_from_u64(7)).await;
            let second = resolver.resolve(input, &mut StdRng::seed_from_u64(7)).await;
            assert_eq!(first, second, "{input}");
        }
    }

    #[tokio::test]
    async fn test_dataset_containment() {
        let resolver = ResponseResolver::builder().dataset(sample_dataset()).build();

        let resolution = resolver.resolve_detailed("How are you?", &mut rng()).await;
        assert_eq!(resolution.source, ReplySource::Dataset);
        assert_eq!(resolution.reply, "Fine, thanks");
    }

    #[tokio::test]
    async fn test_dataset_record_without_input_is_skipped() {
        let resolver = ResponseResolver::builder().dataset(sample_dataset()).build();

        // only the record with an empty input contains "say hello"
        let resolution = resolver.resolve_detailed("say hello", &mut rng()).await;
        assert_ne!(resolution.source, ReplySource::Dataset);
    }

    #[tokio::test]
    async fn test_category_uses_detected_language() {
        let resolver = ResponseResolver::builder()
            .dataset(sample_dataset())
            .categories(CategoryReplies::builtin())
            .build();

        let resolution = resolver.resolve_detailed("hello my friend", &mut rng()).await;
        assert_eq!(resolution.source, ReplySource::Category);
        assert!(
            ["Hi! How are you?", "Hello! How can I help you today?"]
                .contains(&resolution.reply.as_str())
        );

        // short input is assumed Telugu
        let resolution = resolver.resolve_detailed("hi", &mut rng()).await;
        assert_eq!(resolution.source, ReplySource::Category);
        assert!(!resolution.reply.is_ascii());
    }

    #[tokio::test]
    async fn test_category_shadows_phrase_table() {
        let resolver = ResponseResolver::builder().categories(CategoryReplies::builtin()).build();
        let resolution = resolver.resolve_detailed("mee peru emiti", &mut rng()).await;
        assert_eq!(resolution.source, ReplySource::Phrase);

        let resolution = resolver.resolve_detailed("who are you", &mut rng()).await;
        assert_eq!(resolution.source, ReplySource::Category);
    }

    #[tokio::test]
    async fn test_generator_fallback() {
        let mock = MockGenerator::replying("నేను బాగున్నాను, ధన్యవాదాలు!");
        let resolver = resolver_with(&mock);

        let resolution = resolver.resolve_detailed("tell me about the weather", &mut rng()).await;
        assert_eq!(resolution.source, ReplySource::Generated);
        assert_eq!(resolution.reply, "నేను బాగున్నాను, ధన్యవాదాలు!");
        assert_eq!(mock.call_history()[0].target_language, Some(Language::English));
    }

    #[tokio::test]
    async fn test_generator_failure_gives_apology() {
        let mock = MockGenerator::new();
        mock.add_error(LLMError::network("offline"));
        let resolver = resolver_with(&mock);

        let resolution = resolver.resolve_detailed("tell me a story", &mut rng()).await;
        assert_eq!(resolution.source, ReplySource::Fallback);
        assert_eq!(resolution.reply, APOLOGY);

        let mock = MockGenerator::new();
        mock.add_response(Generation::empty());
        let reply = resolver_with(&mock).resolve("tell me a story", &mut rng()).await;
        assert_eq!(reply, APOLOGY);
    }

    #[tokio::test]
    async fn test_apology_without_generator() {
        let resolver = ResponseResolver::builder().build();
        assert_eq!(resolver.resolve("zzz unknown", &mut rng()).await, APOLOGY);

        let mock = MockGenerator::new();
        let resolver = ResponseResolver::builder()
            .generator(Arc::new(mock.clone()))
            .generative_fallback(false)
            .build();
        assert_eq!(resolver.resolve("zzz unknown", &mut rng()).await, APOLOGY);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_any_length_input_resolves() {
        let mock = MockGenerator::new();
        let resolver = resolver_with(&mock);
        let long = "పదం ".repeat(2_500);

        for input in ["", "x", long.as_str()] {
            assert!(!resolver.resolve(input, &mut rng()).await.is_empty());
        }
    }

    struct AlwaysTamil;

    impl LanguageDetector for AlwaysTamil {
        fn detect(&self, _text: &str) -> Option<String> {
            Some("ta".to_string())
        }
    }

    #[tokio::test]
    async fn test_unsupported_detection_is_overridden() {
        let mock = MockGenerator::replying("ok");
        let resolver = ResponseResolver::builder()
            .generator(Arc::new(mock.clone()))
            .detector(Arc::new(AlwaysTamil))
            .build();

        resolver.resolve("what is the capital of india", &mut rng()).await;
        assert_eq!(mock.call_history()[0].target_language, Some(Language::English));
    }
}
