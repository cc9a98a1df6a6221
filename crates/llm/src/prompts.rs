//! Prompt templates for summarization

use crate::types::{SummaryConfig, SummaryFormat, SummaryLength, SummaryTone};

/// Instruction clause for the requested summary length
pub fn length_clause(length: SummaryLength) -> &'static str {
    match length {
        SummaryLength::Concise => "very brief and concise, focusing only on the core message",
        SummaryLength::Balanced => "informative but condensed, capturing the main points clearly",
        SummaryLength::Detailed => "thorough and comprehensive, covering major supporting details",
    }
}

/// Instruction clause for the requested tone
pub fn tone_clause(tone: SummaryTone) -> &'static str {
    match tone {
        SummaryTone::Professional => "formal and professional",
        SummaryTone::Casual => "casual and easy to read",
        SummaryTone::Academic => "scholarly and analytical",
        SummaryTone::Creative => "engaging and creative",
    }
}

/// Instruction clause for the requested output format
pub fn format_clause(format: SummaryFormat) -> &'static str {
    match format {
        SummaryFormat::Paragraph => "as a well-structured paragraph",
        SummaryFormat::Bullets => "as a clear list of bullet points",
    }
}

/// Assemble the summarization instruction for one (text, config) pair
///
/// Interpolates one clause from each table plus the verbatim input text,
/// and directs the model to return only the summary body.
pub fn build_instruction(text: &str, config: &SummaryConfig) -> String {
    format!(
        "Summarize the following text using intelligence.\n\
         The summary should be {}.\n\
         The tone should be {}.\n\
         The output format should be {}.\n\
         \n\
         Input Text:\n\
         ---\n\
         {}\n\
         ---\n\
         \n\
         Return only the summary text without any preamble or conversational fillers.",
        length_clause(config.length),
        tone_clause(config.tone),
        format_clause(config.format),
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_value_has_a_clause() {
        for length in SummaryLength::ALL {
            assert!(!length_clause(length).is_empty());
        }
        for tone in SummaryTone::ALL {
            assert!(!tone_clause(tone).is_empty());
        }
        for format in SummaryFormat::ALL {
            assert!(!format_clause(format).is_empty());
        }
    }

    #[test]
    fn test_clauses_are_distinct_per_table() {
        let lengths: Vec<_> = SummaryLength::ALL.iter().map(|l| length_clause(*l)).collect();
        let tones: Vec<_> = SummaryTone::ALL.iter().map(|t| tone_clause(*t)).collect();
        let formats: Vec<_> = SummaryFormat::ALL.iter().map(|f| format_clause(*f)).collect();

        for clauses in [lengths, tones, formats] {
            for (i, a) in clauses.iter().enumerate() {
                for b in clauses.iter().skip(i + 1) {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_instruction_contains_selected_clauses_and_text() {
        let config = SummaryConfig::default();
        let text = "The quarterly report shows revenue grew in every region this year.";
        let instruction = build_instruction(text, &config);

        assert!(instruction.contains(length_clause(config.length)));
        assert!(instruction.contains(tone_clause(config.tone)));
        assert!(instruction.contains(format_clause(config.format)));
        assert!(instruction.contains(text));
    }

    #[test]
    fn test_instruction_contains_exactly_one_clause_per_table() {
        let config = SummaryConfig {
            length: SummaryLength::Detailed,
            tone: SummaryTone::Academic,
            format: SummaryFormat::Paragraph,
        };
        let instruction = build_instruction("some input text here", &config);

        let selected_lengths = SummaryLength::ALL
            .iter()
            .filter(|l| instruction.contains(length_clause(**l)))
            .count();
        let selected_tones = SummaryTone::ALL
            .iter()
            .filter(|t| instruction.contains(tone_clause(**t)))
            .count();
        let selected_formats = SummaryFormat::ALL
            .iter()
            .filter(|f| instruction.contains(format_clause(**f)))
            .count();

        assert_eq!(selected_lengths, 1);
        assert_eq!(selected_tones, 1);
        assert_eq!(selected_formats, 1);
    }

    #[test]
    fn test_concise_casual_bullets_scenario() {
        let config = SummaryConfig {
            length: SummaryLength::Concise,
            tone: SummaryTone::Casual,
            format: SummaryFormat::Bullets,
        };
        let text = "The team shipped the new release on time despite two late-breaking bugs.";
        assert_eq!(crate::types::word_count(text), 12);

        let instruction = build_instruction(text, &config);
        assert!(instruction.contains("very brief and concise"));
        assert!(instruction.contains("casual and easy to read"));
        assert!(instruction.contains("a clear list of bullet points"));
        assert!(instruction.contains(text));
    }
}
