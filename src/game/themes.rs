//! Built-in spectrum card tables.

use super::card::Theme;

const GENERAL: &[(&str, &str)] = &[
    ("Hot", "Cold"),
    ("Overrated", "Underrated"),
    ("Useless", "Useful"),
    ("Bad Habit", "Good Habit"),
    ("Normal", "Weird"),
    ("Easy to Spell", "Hard to Spell"),
    ("Fantasy", "Sci-Fi"),
    ("Rough", "Smooth"),
    ("Round", "Pointy"),
    ("Dangerous", "Safe"),
    ("Unpopular", "Popular"),
    ("Forgettable", "Memorable"),
    ("Cheap", "Expensive"),
    ("Sad Song", "Happy Song"),
    ("Villain", "Hero"),
    ("Low Calorie", "High Calorie"),
    ("Ugly", "Beautiful"),
    ("Tastes Bad", "Tastes Good"),
    ("Old", "New"),
    ("Mild", "Spicy"),
];

const FOOD_AND_DRINK: &[(&str, &str)] = &[
    ("Comfort Food", "Fancy Food"),
    ("Overseasoned", "Underseasoned"),
    ("More Filling", "More Flavorful"),
    ("Everyday Food", "Special Occasion Food"),
    ("Looks Better Than It Tastes", "Tastes Better Than It Looks"),
    ("Too Sweet", "Too Bitter"),
    ("Snack", "Meal"),
    ("Authentic", "Adapted for Mass Appeal"),
    ("Guilty Pleasure", "Virtuous Choice"),
    ("Messy", "Neat"),
    ("Overpriced", "Great Value"),
    ("Hangover Food", "Date-Night Food"),
    ("An Acquired Taste", "Instantly Likeable"),
    ("Too Rich", "Too Light"),
    ("Fast Food", "Slow Food"),
    ("More Sauce", "More Texture"),
    ("Weird Combo", "Classic Combo"),
    ("Home-Cooked Vibes", "Restaurant Vibes"),
    ("More Caffeine", "More Comfort"),
    ("Worth the Calories", "Not Worth the Calories"),
];

const POP_CULTURE_AND_MEDIA: &[(&str, &str)] = &[
    ("Overhyped", "Deserves the Hype"),
    ("Instant Classic", "Flash in the Pan"),
    ("Background Noise", "Must-Pay-Attention"),
    ("Critic Bait", "Crowd Pleaser"),
    ("More Style", "More Story"),
    ("Aging Poorly", "Aging Well"),
    ("Too Long", "Too Short"),
    ("Rewatchable", "One-and-Done"),
    ("Pretentious", "Simple Fun"),
    ("Mainstream Appeal", "Cult Appeal"),
    ("More Spectacle", "More Substance"),
    ("Hard to Recommend", "Easy to Recommend"),
    ("Emotionally Heavy", "Emotionally Light"),
    ("Feels Fresh", "Feels Familiar"),
    ("Merchandise-Driven", "Artist-Driven"),
    ("Too Safe", "Too Risky"),
    ("Internet-Brained", "Offline-Brained"),
    ("More Meme", "More Meaning"),
    ("Peaked Early", "Late Bloomer"),
    ("Cultural Moment", "Enduring Favorite"),
];

const RELATIONSHIPS_AND_EMOTIONS: &[(&str, &str)] = &[
    ("Emotionally Guarded", "Emotionally Open"),
    ("Low Maintenance", "High Maintenance"),
    ("More Effort", "More Chemistry"),
    ("Healthy Boundary", "Emotional Wall"),
    ("Romantic", "Practical"),
    ("Says Too Much", "Says Too Little"),
    ("Feels Forced", "Feels Natural"),
    ("Casual", "Intense"),
    ("More Listening", "More Talking"),
    ("Emotionally Draining", "Emotionally Energizing"),
    ("Good on Paper", "Good in Reality"),
    ("Avoidant", "Clingy"),
    ("Clear Signals", "Mixed Signals"),
    ("Surface-Level", "Deep"),
    ("More Comfort", "More Excitement"),
    ("Hard to Read", "Easy to Read"),
    ("Overthinking", "Trusting the Vibe"),
    ("Emotionally Safe", "Emotionally Challenging"),
    ("Too Much Too Soon", "Too Slow to Start"),
    ("Feels Temporary", "Feels Lasting"),
];

const ABSURD_AND_CHAOTIC: &[(&str, &str)] = &[
    ("Barely a Thing", "Definitely a Thing"),
    ("Feels Illegal", "Feels Encouraged"),
    ("Shouldn't Exist", "Glad It Exists"),
    ("Unnecessarily Intense", "Not Intense Enough"),
    ("Accidentally Genius", "Obviously Dumb"),
    ("Chaos Energy", "Control Energy"),
    ("Unhinged", "Well-Adjusted"),
    ("Feels Like a Prank", "Feels Legit"),
    ("Ruins the Vibe", "Is the Vibe"),
    ("Main Character Behavior", "NPC Energy"),
    ("Socially Dangerous", "Socially Safe"),
    ("Too Much Power", "Not Enough Power"),
    ("Funny Once", "Funny Forever"),
    ("Accidental Flex", "Intentional Flex"),
    ("Deeply Cursed", "Blessed Actually"),
    ("Makes It Worse", "Makes It Better"),
    ("Unsettling", "Comforting"),
    ("Feels Like a Trap", "Feels Like a Hack"),
    ("Hard No", "Hear Me Out"),
    ("Unnecessary Chaos", "Necessary Chaos"),
];

const AFTER_DARK: &[(&str, &str)] = &[
    ("Innocent", "Suggestive"),
    ("First-Date Energy", "Third-Date Energy"),
    ("Emotional Intimacy", "Physical Intimacy"),
    ("Flirting", "Just Being Friendly"),
    ("Low-Key Attractive", "Obviously Hot"),
    ("More Tension", "More Release"),
    ("Romantic Gesture", "Strategic Move"),
    ("Soft Launch", "Hard Launch"),
    ("Too Personal", "Not Personal Enough"),
    ("Subtle", "Obvious"),
    ("Safe Choice", "Bold Choice"),
    ("More Fantasy", "More Reality"),
    ("Feels Intimate", "Feels Public"),
    ("Emotionally Vulnerable", "Emotionally Guarded"),
    ("Playful", "Serious"),
    ("Comfort Zone", "Stretch Zone"),
    ("Chemistry Is There", "Chemistry Is Missing"),
    ("Slow Burn", "Immediate Spark"),
    ("More Anticipation", "More Satisfaction"),
    ("Regrettable", "Memorable"),
];

const MODERN_LIFE: &[(&str, &str)] = &[
    ("Life-Changing", "Barely Matters"),
    ("Overstimulating", "Understimulating"),
    ("Time Well Spent", "Time Wasted"),
    ("Feels Like Work", "Feels Like Play"),
    ("Always Online", "Mostly Offline"),
    ("Convenient", "Soul-Draining"),
    ("Productive", "Performative"),
    ("Self-Care", "Self-Indulgence"),
    ("Modern Necessity", "Artificial Need"),
    ("Too Much Choice", "Too Little Choice"),
    ("Optimized", "Human"),
    ("More Noise", "More Signal"),
    ("Feels Mandatory", "Feels Optional"),
    ("Short-Term Fix", "Long-Term Solution"),
    ("Authentic", "Curated"),
    ("Burnout Fuel", "Burnout Cure"),
    ("Life Hack", "Life Trap"),
    ("Empowering", "Overwhelming"),
    ("Status-Driven", "Value-Driven"),
    ("More Speed", "More Presence"),
];

const TECH_AND_STARTUPS: &[(&str, &str)] = &[
    ("Overengineered", "Elegant"),
    ("Disruptive", "Incremental"),
    ("Startup-y", "Enterprise-y"),
    ("More Buzzwords", "More Substance"),
    ("Fast to Build", "Built to Last"),
    ("Founder-Led", "Process-Led"),
    ("Move Fast", "Be Careful"),
    ("Nice-to-Have", "Must-Have"),
    ("Technical Debt", "Clean Architecture"),
    ("Hyped", "Actually Useful"),
    ("Scales Poorly", "Scales Well"),
    ("More Vision", "More Execution"),
    ("Premature Optimization", "Future-Proofing"),
    ("Impressive Demo", "Solid Product"),
    ("Founder Ego", "User-Centered"),
    ("Over-Abstracted", "Concrete"),
    ("Hacky", "Robust"),
    ("Shipped Too Soon", "Shipped Too Late"),
    ("More Meetings", "More Building"),
    ("VC-Friendly", "Customer-Friendly"),
];

/// Name, menu blurb and cards of each built-in theme, in menu order.
const BUILT_IN: &[(&str, &str, &[(&str, &str)])] = &[
    ("General", "A bit of everything", GENERAL),
    ("Food & Drink", "Snacks, feasts and questionable combos", FOOD_AND_DRINK),
    ("Pop Culture & Media", "Films, shows, music and memes", POP_CULTURE_AND_MEDIA),
    ("Relationships & Emotions", "Dating, feelings and mixed signals", RELATIONSHIPS_AND_EMOTIONS),
    ("Absurd & Chaotic", "Unhinged ideas, cursed and blessed", ABSURD_AND_CHAOTIC),
    ("After Dark (Tasteful)", "Flirty but safe for mixed company", AFTER_DARK),
    ("Modern Life", "Screens, hustle and self-care", MODERN_LIFE),
    ("Tech & Startups", "Buzzwords, demos and technical debt", TECH_AND_STARTUPS),
];

fn build((name, description, cards): &(&str, &str, &[(&str, &str)])) -> Theme {
    Theme::from_pairs(name, cards).with_description(*description)
}

/// All built-in themes, in menu order.
pub fn built_in() -> Vec<Theme> {
    BUILT_IN.iter().map(build).collect()
}

/// The theme active before anything has been selected.
pub fn general() -> Theme {
    build(&BUILT_IN[0])
}

/// Look up a built-in theme by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<Theme> {
    BUILT_IN
        .iter()
        .find(|(theme_name, ..)| theme_name.eq_ignore_ascii_case(name))
        .map(build)
}
