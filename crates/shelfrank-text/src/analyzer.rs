use tantivy::tokenizer::{StopWordFilter, TextAnalyzer, WhitespaceTokenizer};

/// English stopwords. Contractions are absent: punctuation is stripped
/// before tokens reach the filter, so "don't" can only ever arrive as "dont".
pub const STOP_WORDS: &[&str] = &[
	"i","me","my","myself","we","our","ours","ourselves","you","your","yours","yourself","yourselves",
	"he","him","his","himself","she","her","hers","herself","it","its","itself","they","them","their",
	"theirs","themselves","what","which","who","whom","this","that","these","those","am","is","are",
	"was","were","be","been","being","have","has","had","having","do","does","did","doing","a","an",
	"the","and","but","if","or","because","as","until","while","of","at","by","for","with","about",
	"against","between","into","through","during","before","after","above","below","to","from","up",
	"down","in","out","on","off","over","under","again","further","then","once","here","there","when",
	"where","why","how","all","any","both","each","few","more","most","other","some","such","no","nor",
	"not","only","own","same","so","than","too","very","s","t","can","will","just","don","should","now",
	"d","ll","m","o","re","ve","y","ain","aren","couldn","didn","doesn","hadn","hasn","haven","isn",
	"ma","mightn","mustn","needn","shan","shouldn","wasn","weren","won","wouldn",
];

pub fn is_stop_word(token: &str) -> bool {
	STOP_WORDS.contains(&token)
}

/// Whitespace split followed by stopword removal. Input is expected to be
/// lower-cased and stripped of punctuation already.
pub fn build_analyzer() -> TextAnalyzer {
	TextAnalyzer::builder(WhitespaceTokenizer::default())
		.filter(StopWordFilter::remove(STOP_WORDS.iter().map(|s| s.to_string())))
		.build()
}
