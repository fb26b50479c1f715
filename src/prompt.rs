//! Builds the fixed Japanese instruction given to the generation model.

use crate::models::review::ReviewRequest;

/// Renders the review-writing prompt for one request. The comment is
/// embedded verbatim inside 「」 and each rating is stated as a star count.
pub fn build_review_prompt(request: &ReviewRequest) -> String {
    format!(
        "あなたはホットペッパービューティーのレビュー作成アシスタントです。\n\
         以下の情報をもとに、自然で好意的な日本語の口コミを生成してください。\n\
         \n\
         評価：\n\
         - サービス: {service}つ星\n\
         - 技術・仕上がり: {skill}つ星\n\
         - 雰囲気: {atmosphere}つ星\n\
         \n\
         お客様のコメント：\n\
         「{comment}」\n\
         \n\
         要件：\n\
         - 100文字程度の自然な日本語で書いてください\n\
         - フレンドリーで前向きな口調で\n\
         - 具体的なコメントを含めつつ、総合的な満足感を表現してください\n\
         - 「また利用したい」といった前向きな締めくくりを含めてください\n\
         \n\
         レビュー文のみを出力してください。説明文や前置きは不要です。",
        service = request.service,
        skill = request.skill,
        atmosphere = request.atmosphere,
        comment = request.comment,
    )
}
