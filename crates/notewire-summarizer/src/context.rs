//! Folder-aware research contexts.

const GENERIC_CONTEXT: &str = "Provide a helpful overview of this topic.";

/// Domain instruction for a project folder.
///
/// The project name wins over the parent; lookups are case-insensitive, and
/// an unknown pair falls back to the generic instruction.
pub fn resolve_context(project_name: &str, parent_project: Option<&str>) -> &'static str {
    lookup(project_name)
        .or_else(|| parent_project.and_then(lookup))
        .unwrap_or(GENERIC_CONTEXT)
}

fn lookup(name: &str) -> Option<&'static str> {
    let key = name.to_lowercase();
    FOLDER_CONTEXTS
        .iter()
        .find(|(folder, _)| *folder == key)
        .map(|(_, context)| *context)
}

const FOLDER_CONTEXTS: &[(&str, &str)] = &[
    // Leisure
    (
        "travel",
        "This is a travel destination. Focus on: best time to visit, must-see attractions, local food/culture, accommodation areas, getting around, and budget tips.",
    ),
    (
        "golf courses",
        "This is a golf course or golf destination. Focus on: course difficulty/rating, signature holes, green fees, best time to play, amenities, and nearby courses.",
    ),
    (
        "restaurants and bars",
        "This is a restaurant or bar. Focus on: cuisine type, signature dishes/drinks, price range, ambiance, reservations, and best times to visit.",
    ),
    (
        "shopping",
        "This is a shopping destination or store. Focus on: what they sell, price range, unique offerings, location, and best deals/times.",
    ),
    (
        "biking and hiking",
        "This is a biking or hiking trail/destination. Focus on: difficulty level, distance, elevation, best seasons, required gear, and trailhead access.",
    ),
    // Media
    (
        "books",
        "This is a book. Focus on: author background, genre, main themes, why it's notable, similar books, and who would enjoy it.",
    ),
    (
        "movies and shows",
        "This is a movie or TV show. Focus on: genre, plot summary (no spoilers), director/cast, why it's notable, where to watch, and similar titles.",
    ),
    (
        "music",
        "This is a music artist, album, or song. Focus on: genre, style, notable works, influences, and similar artists.",
    ),
    // Learning
    (
        "learning",
        "This is a learning topic. Focus on: core concepts, prerequisites, best resources, practical applications, and learning path.",
    ),
    // Work/Projects
    (
        "amazing tech",
        "This is a technology or tool. Focus on: what it does, key features, use cases, pricing, alternatives, and getting started.",
    ),
    (
        "automation tasks",
        "This is an automation idea. Focus on: problem it solves, tools needed, implementation steps, and potential challenges.",
    ),
    (
        "portal ideas",
        "This is a product/portal idea. Focus on: problem statement, target users, key features, competitive landscape, and MVP scope.",
    ),
    // Health
    (
        "blood and health",
        "This is a health topic. Focus on: what it is, symptoms/indicators, causes, treatments/management, and when to see a doctor.",
    ),
];
