//! Content shipped with the app

use super::*;

pub(super) fn catalog() -> ContentCatalog {
    ContentCatalog {
        news: news(),
        lock_tasks: lock_tasks(),
        missions: missions(),
        action_categories: action_categories(),
        rewards: rewards(),
        recent_rewards: recent_rewards(),
        impact_stats: impact_stats(),
        monthly_impact: monthly_impact(),
        impact_achievements: impact_achievements(),
        topics: topics(),
        subject_progress: subject_progress(),
        modules: modules(),
        learning_achievements: learning_achievements(),
        quizzes: quizzes(),
        feed_posts: feed_posts(),
        activity_posts: activity_posts(),
        community_challenges: community_challenges(),
        group_challenges: group_challenges(),
        groups: groups(),
        leaderboard: leaderboard(),
        participants: participants(),
        challenge_tips: vec![
            "Start small - even 5 minutes of eco-action daily makes a difference".into(),
            "Share your progress with friends for motivation".into(),
            "Document your journey with photos".into(),
            "Connect with other participants for support".into(),
        ],
        profile_achievements: profile_achievements(),
        profile_stats: vec![
            stat("Actions Completed", "42", "checkmark-circle"),
            stat("CO2 Saved", "15.2 kg", "leaf"),
            stat("Days Active", "28", "calendar"),
            stat("Community Rank", "#156", "trophy"),
        ],
    }
}

fn stat(label: &str, value: &str, icon: &str) -> StatCard {
    StatCard {
        label: label.into(),
        value: value.into(),
        icon: icon.into(),
    }
}

fn achievement(
    id: u32,
    title: &str,
    description: &str,
    icon: &str,
    color: &str,
    progress: u8,
) -> Achievement {
    Achievement {
        id,
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        color: color.into(),
        progress,
    }
}

fn news() -> Vec<NewsCard> {
    vec![
        NewsCard {
            id: 1,
            kind: NewsKind::Global,
            title: "UN Climate Summit Announces New Carbon Reduction Targets".into(),
            summary: "World leaders commit to 50% emission cuts by 2030".into(),
            points: 5,
            icon: "earth".into(),
            color: "#3b82f6".into(),
        },
        NewsCard {
            id: 2,
            kind: NewsKind::Local,
            title: "Seoul Launches Green Transportation Initiative".into(),
            summary: "New electric bus network reduces city emissions by 30%".into(),
            points: 5,
            icon: "bus".into(),
            color: "#10b981".into(),
        },
        NewsCard {
            id: 3,
            kind: NewsKind::Quiz,
            title: "Daily Climate Challenge".into(),
            summary: "How much CO2 does one tree absorb per year?".into(),
            points: 10,
            icon: "help-circle".into(),
            color: "#f59e0b".into(),
        },
    ]
}

fn lock_tasks() -> Vec<LockTask> {
    let task = |id, title: &str, difficulty, points, icon: &str, color: &str| LockTask {
        id,
        title: title.into(),
        difficulty,
        points,
        icon: icon.into(),
        color: color.into(),
    };
    vec![
        task(1, "Use Reusable Water Bottle", SkillLevel::Beginner, 15, "water", "#06b6d4"),
        task(2, "Take Public Transport", SkillLevel::Intermediate, 25, "train", "#8b5cf6"),
        task(3, "Zero Waste Shopping", SkillLevel::Advanced, 50, "bag", "#ef4444"),
    ]
}

fn missions() -> Vec<Mission> {
    vec![
        Mission {
            id: 1,
            title: "Use Reusable Cup".into(),
            description: "Take a photo with your reusable cup at a café".into(),
            points: 15,
            difficulty: Difficulty::Easy,
            duration: "5 min".into(),
            category: MissionCategory::DailyLife,
            icon: "cafe".into(),
            color: "#10b981".into(),
        },
        Mission {
            id: 2,
            title: "Public Transport".into(),
            description: "Use public transport instead of car today".into(),
            points: 25,
            difficulty: Difficulty::Medium,
            duration: "30 min".into(),
            category: MissionCategory::Transport,
            icon: "bus".into(),
            color: "#3b82f6".into(),
        },
        Mission {
            id: 3,
            title: "Zero Waste Shopping".into(),
            description: "Shop with zero packaging waste".into(),
            points: 50,
            difficulty: Difficulty::Hard,
            duration: "60 min".into(),
            category: MissionCategory::DailyLife,
            icon: "bag".into(),
            color: "#f59e0b".into(),
        },
    ]
}

fn action_categories() -> Vec<ActionCategory> {
    let action = |id, title: &str, description: &str, points, difficulty, co2_saved_kg, icon: &str| {
        EcoAction {
            id,
            title: title.into(),
            description: description.into(),
            points,
            difficulty,
            co2_saved_kg,
            icon: icon.into(),
        }
    };
    use SkillLevel::*;
    vec![
        ActionCategory {
            id: "daily".into(),
            title: "Daily Life".into(),
            icon: "home".into(),
            color: "#10b981".into(),
            actions: vec![
                action(1, "Use Reusable Water Bottle", "Replace single-use plastic bottles", 15, Beginner, 0.5, "water"),
                action(2, "Turn Off Standby Power", "Unplug devices when not in use", 10, Beginner, 0.3, "power"),
                action(3, "Use Eco-friendly Detergent", "Switch to biodegradable cleaning products", 20, Intermediate, 0.8, "leaf"),
            ],
        },
        ActionCategory {
            id: "transport".into(),
            title: "Transportation".into(),
            icon: "car".into(),
            color: "#3b82f6".into(),
            actions: vec![
                action(4, "Use Public Transportation", "Take bus or train instead of driving", 25, Intermediate, 2.3, "train"),
                action(5, "Bike to Work", "Cycle for short distance commutes", 30, Intermediate, 3.1, "bicycle"),
                action(6, "Walk Instead of Drive", "Choose walking for nearby destinations", 20, Beginner, 1.8, "walk"),
            ],
        },
        ActionCategory {
            id: "consumption".into(),
            title: "Consumption".into(),
            icon: "bag".into(),
            color: "#f59e0b".into(),
            actions: vec![
                action(7, "Zero Waste Shopping", "Shop without creating packaging waste", 50, Advanced, 1.5, "bag-handle"),
                action(8, "Buy Second-hand Items", "Choose pre-owned products", 35, Intermediate, 2.8, "refresh"),
                action(9, "Refuse Excessive Packaging", "Say no to unnecessary packaging", 25, Intermediate, 1.2, "close-circle"),
            ],
        },
    ]
}

fn rewards() -> Vec<Reward> {
    let reward = |id, title: &str, description: &str, points, category, image: &str, available| Reward {
        id,
        title: title.into(),
        description: description.into(),
        points,
        category,
        image: image.into(),
        available,
    };
    use RewardCategory::*;
    vec![
        reward(1, "Bamboo Water Bottle", "Sustainable bamboo water bottle", 300, EcoProducts, "🌿", true),
        reward(2, "Solar Power Bank", "Portable solar charging device", 500, EcoProducts, "☀️", true),
        reward(3, "20% Off Organic Store", "Discount at local organic store", 200, Discounts, "🛒", true),
        reward(4, "Tree Planting Experience", "Join a community tree planting event", 400, Experiences, "🌳", true),
        reward(5, "Ocean Cleanup Donation", "Donate to ocean cleanup initiatives", 250, Donations, "🌊", true),
        reward(6, "Eco-friendly Tote Bag", "Reusable cotton tote bag", 150, EcoProducts, "👜", false),
        reward(7, "Plant a Tree", "Fund tree planting initiatives", 100, Donations, "🌱", true),
        reward(8, "Wildlife Protection", "Protect endangered species", 500, Donations, "🐾", true),
        reward(9, "Organic Farm Visit", "Educational farm experience", 1000, Experiences, "🌻", true),
        reward(10, "Zero Waste Workshop", "Learn sustainable living", 800, Experiences, "🎓", true),
        reward(11, "Nature Photography Tour", "Guided eco-photography", 1200, Experiences, "📷", false),
    ]
}

fn recent_rewards() -> Vec<RecentReward> {
    vec![
        RecentReward {
            id: 1,
            title: "Tree Planting Certificate".into(),
            points: 500,
            date: "2 days ago".into(),
            status: RedemptionStatus::Redeemed,
        },
        RecentReward {
            id: 2,
            title: "Eco-friendly Water Bottle".into(),
            points: 300,
            date: "1 week ago".into(),
            status: RedemptionStatus::Shipped,
        },
        RecentReward {
            id: 3,
            title: "Solar Charger Discount".into(),
            points: 200,
            date: "2 weeks ago".into(),
            status: RedemptionStatus::Used,
        },
    ]
}

fn impact_stats() -> Vec<ImpactStat> {
    let impact = |icon: &str, value: &str, unit: &str, label: &str, color: &str, description: &str| {
        ImpactStat {
            icon: icon.into(),
            value: value.into(),
            unit: unit.into(),
            label: label.into(),
            color: color.into(),
            description: description.into(),
        }
    };
    vec![
        impact("leaf", "45.2", "kg CO2", "Carbon Saved", "#22c55e", "Equivalent to planting 2 trees"),
        impact("water", "1,250", "liters", "Water Saved", "#3b82f6", "Enough for 8 days of drinking"),
        impact("trash", "12.8", "kg", "Waste Reduced", "#f59e0b", "Diverted from landfills"),
        impact("flash", "89", "kWh", "Energy Saved", "#8b5cf6", "Powers a home for 3 days"),
    ]
}

fn monthly_impact() -> Vec<MonthlyImpact> {
    [
        ("Jan", 8.2, 180.0, 2.1),
        ("Feb", 9.1, 220.0, 2.8),
        ("Mar", 7.8, 195.0, 2.3),
        ("Apr", 10.5, 280.0, 3.2),
        ("May", 9.6, 375.0, 2.4),
    ]
    .into_iter()
    .map(|(month, co2_kg, water_liters, waste_kg)| MonthlyImpact {
        month: month.into(),
        co2_kg,
        water_liters,
        waste_kg,
    })
    .collect()
}

fn impact_achievements() -> Vec<Achievement> {
    vec![
        achievement(1, "Carbon Warrior", "Saved 50kg of CO2 emissions", "shield-checkmark", "#22c55e", 90),
        achievement(2, "Water Guardian", "Conserved 1000L of water", "water", "#3b82f6", 100),
        achievement(3, "Waste Reducer", "Diverted 10kg from landfills", "trash", "#f59e0b", 100),
        achievement(4, "Energy Saver", "Saved 100kWh of energy", "flash", "#8b5cf6", 89),
    ]
}

fn topics() -> Vec<LearningTopic> {
    let topic = |id: &str, title: &str, icon: &str, color: &str, progress, lessons| LearningTopic {
        id: id.into(),
        title: title.into(),
        icon: icon.into(),
        color: color.into(),
        progress,
        lessons,
    };
    vec![
        topic("climate-basics", "Climate Science Basics", "thermometer", "#ef4444", 75, 12),
        topic("daily-life", "Environmental Issues in Daily Life", "home", "#10b981", 45, 8),
        topic("media-literacy", "Environmental Media Literacy", "newspaper", "#3b82f6", 30, 6),
        topic("global-policy", "Global Environmental Policy", "globe", "#8b5cf6", 15, 10),
    ]
}

fn subject_progress() -> Vec<SubjectProgress> {
    [
        ("Climate Science", 85, "#ef4444"),
        ("Sustainable Living", 60, "#10b981"),
        ("Renewable Energy", 40, "#f59e0b"),
    ]
    .into_iter()
    .map(|(subject, progress, color)| SubjectProgress {
        subject: subject.into(),
        progress,
        color: color.into(),
    })
    .collect()
}

const CARBON_CYCLE: &str = "The Carbon Cycle

The carbon cycle is nature's way of recycling carbon atoms. Carbon moves from the atmosphere to plants, to animals, and back to the atmosphere...

Key Points:
• Oceans absorb about 30% of human CO2 emissions
• Plants use carbon dioxide for photosynthesis
• Deforestation disrupts the natural carbon cycle
• Human activities have increased atmospheric CO2 by 40%

Understanding the carbon cycle helps us make better environmental decisions and reduce our carbon footprint.";

fn modules() -> Vec<LearningModule> {
    vec![
        LearningModule {
            id: 1,
            title: "Carbon Cycle Basics".into(),
            points: 15,
            duration: "5 min".into(),
            read_time: "2 min read".into(),
            icon: "leaf".into(),
            color: "#10b981".into(),
            content: CARBON_CYCLE.into(),
            quiz: None,
        },
        LearningModule {
            id: 2,
            title: "Water Conservation Quiz".into(),
            points: 20,
            duration: "3 min".into(),
            read_time: "3 min".into(),
            icon: "water".into(),
            color: "#3b82f6".into(),
            content: String::new(),
            quiz: Some(MODULE_QUIZ_ID.into()),
        },
    ]
}

fn learning_achievements() -> Vec<Achievement> {
    vec![
        achievement(1, "Eco Beginner", "Complete 10 missions", "star", "#10b981", 100),
        achievement(2, "Green Warrior", "7-day streak", "flash", "#10b981", 100),
        achievement(3, "Climate Expert", "Complete all climate modules", "school", "#6b7280", 0),
    ]
}

fn question(id: u32, question: &str, options: [&str; 4], correct: usize, explanation: &str) -> QuizQuestion {
    QuizQuestion {
        id,
        question: question.into(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct,
        explanation: explanation.into(),
    }
}

fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: DAILY_QUIZ_ID.into(),
            title: "Daily Climate Challenge".into(),
            questions: vec![
                question(
                    1,
                    "What percentage of global greenhouse gas emissions come from transportation?",
                    ["14%", "24%", "34%", "44%"],
                    1,
                    "Transportation accounts for approximately 24% of global CO2 emissions from fuel combustion.",
                ),
                question(
                    2,
                    "Which renewable energy source has grown the fastest in recent years?",
                    ["Solar", "Wind", "Hydro", "Geothermal"],
                    0,
                    "Solar energy has experienced the most rapid growth globally, with costs falling dramatically.",
                ),
                question(
                    3,
                    "How much water can be saved by taking a 4-minute shower instead of 8 minutes?",
                    ["10 gallons", "20 gallons", "30 gallons", "40 gallons"],
                    2,
                    "A typical shower uses about 7.5 gallons per minute, so 4 minutes saves about 30 gallons.",
                ),
            ],
        },
        Quiz {
            id: MODULE_QUIZ_ID.into(),
            title: "Renewable Energy Quiz".into(),
            questions: vec![question(
                1,
                "Which renewable energy source generates the most electricity globally?",
                ["Solar Power", "Hydroelectric Power", "Wind Power", "Geothermal Power"],
                1,
                "Hydroelectric power currently generates the most renewable electricity worldwide.",
            )],
        },
    ]
}

fn feed_posts() -> Vec<FeedPost> {
    let post = |id, user: &str, avatar: &str, time: &str, content: &str, counts: (u32, u32, u32), liked, image: Option<&str>| {
        FeedPost {
            id,
            user: user.into(),
            avatar: avatar.into(),
            time: time.into(),
            content: content.into(),
            likes: counts.0,
            comments: counts.1,
            shares: counts.2,
            liked,
            image: image.map(Into::into),
        }
    };
    vec![
        post(
            1,
            "EcoWarrior23",
            "🌱",
            "2h ago",
            "Just completed my 30-day plastic-free challenge! Feeling amazing and ready for the next one. 🌍",
            (24, 8, 3),
            false,
            None,
        ),
        post(
            2,
            "GreenThumb",
            "🌿",
            "4h ago",
            "Started my own vegetable garden today! Here are my tomato seedlings. Any tips for a beginner? 🍅",
            (18, 12, 2),
            true,
            Some("🍅"),
        ),
        post(
            3,
            "ClimateChampion",
            "🌍",
            "6h ago",
            "Organized a beach cleanup with my local community. We collected 50kg of trash! Every small action counts.",
            (45, 15, 8),
            false,
            Some("🏖️"),
        ),
        post(
            4,
            "SolarSaver",
            "☀️",
            "1d ago",
            "My solar panels generated 25kWh today! Clean energy feels so good. Who else is using renewable energy?",
            (32, 9, 5),
            true,
            None,
        ),
    ]
}

fn activity_posts() -> Vec<ActivityPost> {
    let post = |id, user: &str, avatar: &str, action: &str, points, time: &str, likes, comments, image: Option<&str>| {
        ActivityPost {
            id,
            user: user.into(),
            avatar: avatar.into(),
            action: action.into(),
            points,
            time: time.into(),
            likes,
            comments,
            image: image.map(Into::into),
        }
    };
    vec![
        post(1, "EcoWarrior23", "🌱", "completed Zero Waste Shopping", 50, "2 hours ago", 12, 3, None),
        post(2, "GreenThumb", "🌿", "planted 3 trees in the local park", 150, "4 hours ago", 28, 7, Some("🌳")),
        post(3, "ClimateChampion", "♻️", "used public transport for a week", 175, "1 day ago", 45, 12, None),
    ]
}

fn community_challenges() -> Vec<CommunityChallenge> {
    let challenge = |id, title: &str, description: &str, participants, days_left, reward, color: &str, icon: &str| {
        CommunityChallenge {
            id,
            title: title.into(),
            description: description.into(),
            participants,
            days_left,
            reward,
            color: color.into(),
            icon: icon.into(),
        }
    };
    vec![
        challenge(1, "Plastic-Free Week", "Avoid single-use plastics for 7 days", 234, 3, 200, "#ef4444", "ban"),
        challenge(2, "Green Commute Challenge", "Use eco-friendly transportation", 156, 5, 150, "#10b981", "bicycle"),
        challenge(3, "Energy Saving Sprint", "Reduce home energy consumption", 89, 2, 100, "#f59e0b", "flash"),
    ]
}

fn group_challenges() -> Vec<GroupChallenge> {
    let challenge = |id,
                     title: &str,
                     description: &str,
                     participants,
                     reward,
                     difficulty: Option<Difficulty>,
                     category: Option<&str>,
                     status| GroupChallenge {
        id,
        title: title.into(),
        description: description.into(),
        participants,
        reward,
        difficulty,
        category: category.map(Into::into),
        status,
    };
    use GroupChallengeStatus::*;
    vec![
        challenge(
            1,
            "Plastic-Free Week",
            "Avoid single-use plastics for 7 days",
            156,
            200,
            Some(Difficulty::Medium),
            Some("Waste Reduction"),
            Active { days_left: 3, progress: 75, joined: true },
        ),
        challenge(
            2,
            "Walk to Work Challenge",
            "Walk or bike to work for 5 days",
            89,
            150,
            Some(Difficulty::Easy),
            Some("Transportation"),
            Active { days_left: 5, progress: 60, joined: true },
        ),
        challenge(
            3,
            "Zero Food Waste",
            "Complete meals without wasting food",
            234,
            300,
            Some(Difficulty::Hard),
            Some("Food"),
            Active { days_left: 7, progress: 0, joined: false },
        ),
        challenge(
            4,
            "Energy Saving Month",
            "Reduce energy consumption by 20%",
            0,
            500,
            Some(Difficulty::Medium),
            Some("Energy"),
            Upcoming { starts_in: 5 },
        ),
        challenge(
            5,
            "Local Food Challenge",
            "Eat only locally sourced food for 2 weeks",
            0,
            250,
            Some(Difficulty::Hard),
            Some("Food"),
            Upcoming { starts_in: 10 },
        ),
        challenge(
            6,
            "Water Conservation",
            "Reduce water usage by 30%",
            178,
            180,
            None,
            None,
            Completed { earned_points: 180 },
        ),
        challenge(
            7,
            "Meatless Monday",
            "Go vegetarian every Monday for a month",
            145,
            120,
            None,
            None,
            Completed { earned_points: 120 },
        ),
    ]
}

fn groups() -> Vec<Group> {
    let member = |role, joined: &str, recent_activity: &str, unread_messages| {
        Some(Membership {
            role,
            joined: joined.into(),
            recent_activity: recent_activity.into(),
            unread_messages,
        })
    };
    let group = |id, name: &str, description: &str, members, activity, avatar: &str| Group {
        id,
        name: name.into(),
        description: description.into(),
        members,
        activity,
        avatar: avatar.into(),
        category: None,
        membership: None,
    };
    use GroupActivity::*;
    vec![
        Group {
            membership: member(GroupRole::Admin, "2 months ago", "Beach cleanup organized", 3),
            ..group(1, "Green Warriors", "Local environmental activists working together", 45, VeryActive, "🌱")
        },
        Group {
            membership: member(GroupRole::Member, "1 month ago", "New solar installation shared", 0),
            ..group(2, "Solar Enthusiasts", "Sharing tips and experiences with solar energy", 128, Active, "☀️")
        },
        Group {
            membership: member(GroupRole::Moderator, "3 weeks ago", "DIY cleaning products recipe", 7),
            ..group(3, "Zero Waste Community", "Living plastic-free and waste-free lifestyle", 89, Moderate, "♻️")
        },
        Group {
            category: Some("Gardening".into()),
            ..group(4, "Urban Gardeners", "Growing food in small spaces and cities", 234, VeryActive, "🌿")
        },
        Group {
            category: Some("Climate".into()),
            ..group(5, "Climate Action Network", "Global climate change awareness and action", 567, VeryActive, "🌍")
        },
        Group {
            category: Some("Fashion".into()),
            ..group(6, "Sustainable Fashion", "Ethical and eco-friendly clothing choices", 156, Active, "👕")
        },
    ]
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    [
        (1, "EcoMaster", 2450, "👑"),
        (2, "GreenGuru", 2180, "🥈"),
        (3, "ClimateHero", 1950, "🥉"),
        (4, "You", 1250, "🌟"),
        (5, "EcoFriend", 1100, "🌱"),
    ]
    .into_iter()
    .map(|(rank, name, points, badge)| LeaderboardEntry {
        rank,
        name: name.into(),
        points,
        badge: badge.into(),
    })
    .collect()
}

fn participants() -> Vec<Participant> {
    [
        (1, "EcoWarrior23", "🌱", 85),
        (2, "GreenThumb", "🌿", 72),
        (3, "ClimateChampion", "♻️", 90),
    ]
    .into_iter()
    .map(|(id, name, avatar, progress)| Participant {
        id,
        name: name.into(),
        avatar: avatar.into(),
        progress,
    })
    .collect()
}

fn profile_achievements() -> Vec<Achievement> {
    vec![
        achievement(1, "First Steps", "Completed first eco-action", "leaf", "#10b981", 100),
        achievement(2, "Week Warrior", "7-day streak", "flash", "#f59e0b", 100),
        achievement(3, "Quiz Master", "100% quiz accuracy", "school", "#3b82f6", 100),
        achievement(4, "Community Helper", "Helped 10 users", "people", "#8b5cf6", 100),
    ]
}
