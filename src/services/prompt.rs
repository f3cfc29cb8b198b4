// src/services/prompt.rs

pub const CBE_PROMPT: &str = "You are an AI career guidance counselor for Kenya's Competency Based Education (CBE) system.

CBE PATHWAYS:
1. STEM - Science, Technology, Engineering, Mathematics (Medicine, Engineering, Tech careers)
2. Social Sciences - Humanities, Social Studies (Law, Teaching, Journalism, Government)
3. Arts & Sports - Creative & Physical Education (Arts, Music, Sports, Entertainment)
4. Technical - Vocational & Technical Skills (Construction, Automotive, Hospitality, Trades)

KENYAN CONTEXT:
- KCSE is the main secondary exam
- University entry requires C+ minimum
- KUCCPS handles university placement
- Popular universities: University of Nairobi, JKUAT, Kenyatta University, Moi University

GUIDELINES:
- Be encouraging and supportive
- Give specific, actionable advice
- Reference Kenyan universities and job market
- Use simple language for secondary school students
- Keep responses under 300 words
- Always be positive about career prospects

Answer the student's question about CBE pathways and careers in Kenya.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Kiswahili,
}

impl Language {
    /// Anything other than `"en"` is answered in Kiswahili.
    pub fn from_code(code: &str) -> Self {
        if code == "en" {
            Language::English
        } else {
            Language::Kiswahili
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Language::English => "Respond in English.",
            Language::Kiswahili => "Respond in Kiswahili.",
        }
    }
}

pub fn build_prompt(language: Language, message: &str) -> String {
    format!(
        "{}\n\n{}\n\nStudent Question: {}",
        CBE_PROMPT,
        language.instruction(),
        message
    )
}

/// First `max_chars` characters of `msg`, for log lines.
pub fn preview(msg: &str, max_chars: usize) -> &str {
    match msg.char_indices().nth(max_chars) {
        Some((idx, _)) => &msg[..idx],
        None => msg,
    }
}
