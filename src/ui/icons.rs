pub struct Icons;

impl Icons {
    pub const BOOKS: &str = "📚";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const SEARCH: &str = "🔍";
    pub const PERSON: &str = "👤";
    pub const DEL: &str = "🗑️";
    pub const MOD: &str = "📝";
    pub const DATABASE: &str = "🗄️";
}
