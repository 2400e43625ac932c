//! Prompt templates for the generation services. Placeholders like
//! `{lecture_content}` are substituted with `str::replace` before dispatch.

/// Literal the model emits from the lecture-grounded prompt when the supplied
/// text cannot answer the question.
pub const SEARCH_NEEDED_MARKER: &str = "SEARCH_NEEDED";

pub const SEARCH_PREFIX: &str = "SEARCH:";
pub const ANSWER_PREFIX: &str = "ANSWER:";

pub const TOPIC_RECOMMENDATION_PROMPT: &str = r#"You are an expert educational content analyzer specializing in identifying key topics for assessment.

Analyze the following lecture content and identify 5-7 distinct topics that would be excellent for generating quiz questions.

LECTURE CONTENT:
{lecture_content}

REQUIREMENTS:
1. Topics should be specific and focused (not too broad)
2. Cover different aspects and difficulty levels of the content
3. Include both fundamental concepts and practical applications
4. Be relevant to students learning this material
5. Be suitable for generating assessment questions

CRITICAL: Respond ONLY with a valid JSON array of strings. No explanation, no markdown, just the array.

Example format:
["Topic Name 1", "Topic Name 2", "Topic Name 3", "Topic Name 4", "Topic Name 5"]

JSON Response:"#;

pub const MCQ_INSTRUCTIONS: &str = r#"Generate 3-5 high-quality Multiple Choice Questions (MCQ).

For EACH question, provide:
{
  "id": "unique_id",
  "question": "Clear, specific question text",
  "options": ["Option A", "Option B", "Option C", "Option D"],
  "correct": 0,
  "explanation": "Detailed explanation of why the correct answer is right and why others are wrong"
}

RULES:
- All 4 options must be plausible
- Only ONE option should be clearly correct
- Correct answer index is 0-based (0=A, 1=B, 2=C, 3=D)
- Explanation should be educational and thorough
- Questions should test understanding, not just memorization"#;

pub const SUBJECTIVE_INSTRUCTIONS: &str = r#"Generate 3-5 thought-provoking Subjective Questions.

For EACH question, provide:
{
  "id": "unique_id",
  "question": "Open-ended question requiring explanation or analysis",
  "solution": "Comprehensive model answer with key points, explanations, and examples"
}

RULES:
- Questions should encourage critical thinking
- Solutions should be detailed and educational
- Include relevant examples and explanations
- Cover different aspects of the topic"#;

pub const MATHEMATICAL_INSTRUCTIONS: &str = r#"Generate 3-5 Mathematical Problems.

For EACH problem, provide:
{
  "id": "unique_id",
  "question": "Clear mathematical problem statement with necessary information",
  "solution": "Step-by-step solution showing all work and reasoning"
}

RULES:
- Problems should be solvable with provided information
- Solutions must show all steps clearly
- Include formulas and calculations
- Explain the reasoning at each step"#;

pub const LECTURE_GROUNDED_PROMPT: &str = r#"You are a helpful AI learning assistant for college courses. Answer the following question primarily based on the lecture content provided.
If the lecture content doesn't contain the information needed to answer the question completely, indicate that you'll need to search for additional information.

Lecture Content:
{lecture_content}

Question: {query}

Important Instructions:
1. Base your answer primarily on the lecture content provided above.
2. If the lecture content contains the information needed, provide a comprehensive answer using that information.
3. If the lecture content is insufficient or doesn't address the question, respond with "SEARCH_NEEDED" and then we'll use web search to supplement.
4. Be friendly, supportive, and educational in your response.

Your response:"#;

pub const SEARCH_DECISION_PROMPT: &str = r#"You are a helpful AI learning assistant for college courses.

User question: {query}

Do you need to search for current information to answer this question?
If the question is about:
- Current course schedules, deadlines, or assignments
- Recent topics or updates
- Specific factual information you're unsure about

Respond with ONLY "SEARCH: <search query>" if you need to search, or "ANSWER: <your answer>" if you can answer directly."#;

pub const SEARCH_ANSWER_PROMPT: &str = r#"You are a helpful AI learning assistant for college courses.

User question: {query}

Search results:
{search_results}

Based on the search results above, provide a comprehensive and friendly answer to the student's question. Be conversational and supportive."#;

pub const DIRECT_ANSWER_PROMPT: &str = r#"You are a helpful AI learning assistant for college courses. Answer the following question in a friendly, supportive, and comprehensive way.

Question: {query}

Answer:"#;
