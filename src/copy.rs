//! Fixed user-facing text shown by the chat and sent to the provider.

/// Seeded bot greeting for every fresh session.
pub const GREETING: &str =
    "안녕하세요! 👓 렌즈 상담 챗봇입니다. 궁금한 점을 선택하거나 입력해 주세요!";

/// Text of a bot message that carries quick replies.
pub const OPTIONS_PROMPT: &str = "아래에서 선택하거나 추가 질문을 입력해 주세요!";

/// Fallback when a reply has no usable shape at all.
pub const NOT_UNDERSTOOD: &str = "답변을 이해하지 못했습니다.";

/// Shown in place of an answer when the answering service fails.
pub const GENERIC_ERROR: &str = "에러가 발생했습니다.";

/// Shown while a reply is pending.
pub const TYPING_INDICATOR: &str = "답변을 작성 중입니다...";

/// Instruction given to the completion provider with every question.
pub const SYSTEM_PROMPT: &str =
    "너는 렌즈 상담 전문가 챗봇이야. 답변은 항상 짧은 문장 여러 개로 나눠서 배열로 만들어줘.";
