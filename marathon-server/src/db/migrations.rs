//! Schema creation
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS` statements, run at startup and
//! by `marathon migrate`.

use sqlx::PgPool;

/// Entity tables, in dependency order
const TABLES: &[(&str, &str)] = &[
    (
        "students",
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id SERIAL PRIMARY KEY,
            username VARCHAR(45) NOT NULL UNIQUE,
            email VARCHAR(45) NOT NULL UNIQUE,
            password_hash VARCHAR(255) NOT NULL,
            first_name VARCHAR(45) NOT NULL,
            last_name VARCHAR(45) NOT NULL,
            birth_date DATE NOT NULL,
            school_level VARCHAR(45),
            adhd_level VARCHAR(45),
            registered_on VARCHAR(45),
            focus_duration DOUBLE PRECISION,
            solve_speed DOUBLE PRECISION,
            success_rate DOUBLE PRECISION,
            attention_level DOUBLE PRECISION,
            current_level SMALLINT,
            learning_style VARCHAR(45),
            updated_at TIMESTAMP NOT NULL DEFAULT LOCALTIMESTAMP
        )
        "#,
    ),
    (
        "lessons",
        r#"
        CREATE TABLE IF NOT EXISTS lessons (
            id SERIAL PRIMARY KEY,
            name VARCHAR(45) NOT NULL,
            started_at TIMESTAMP,
            ended_at TIMESTAMP,
            completed SMALLINT,
            rings_earned SMALLINT,
            focus_score DOUBLE PRECISION,
            energy_level DOUBLE PRECISION,
            lesson_date DATE
        )
        "#,
    ),
    (
        "topics",
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            id SERIAL PRIMARY KEY,
            name VARCHAR(45) NOT NULL,
            level SMALLINT,
            kind VARCHAR(45),
            body TEXT,
            correct_answer VARCHAR(45),
            hint VARCHAR(45),
            solution_text TEXT,
            solution_video_url VARCHAR(255),
            lesson_id INTEGER REFERENCES lessons(id)
        )
        "#,
    ),
    (
        "exam_simulations",
        r#"
        CREATE TABLE IF NOT EXISTS exam_simulations (
            id SERIAL PRIMARY KEY,
            name VARCHAR(45),
            started_at TIMESTAMP,
            ended_at TIMESTAMP,
            score DOUBLE PRECISION,
            correct_count SMALLINT,
            incorrect_count SMALLINT,
            exam_date DATE,
            scenario TEXT,
            analysis TEXT
        )
        "#,
    ),
    (
        "statistics",
        r#"
        CREATE TABLE IF NOT EXISTS statistics (
            id SERIAL PRIMARY KEY,
            stat_date DATE,
            daily_study_duration DOUBLE PRECISION,
            completed_modules SMALLINT,
            average_focus_score DOUBLE PRECISION,
            solved_questions SMALLINT,
            correct_ratio DOUBLE PRECISION,
            rings_earned SMALLINT,
            break_count SMALLINT,
            total_break_duration DOUBLE PRECISION,
            sleep_quality DOUBLE PRECISION,
            notes TEXT,
            student_id INTEGER REFERENCES students(id)
        )
        "#,
    ),
    (
        "achievements",
        r#"
        CREATE TABLE IF NOT EXISTS achievements (
            id SERIAL PRIMARY KEY,
            name VARCHAR(45) NOT NULL,
            earned_on DATE
        )
        "#,
    ),
    (
        "chatbot_interactions",
        r#"
        CREATE TABLE IF NOT EXISTS chatbot_interactions (
            id SERIAL PRIMARY KEY,
            question TEXT,
            answer TEXT,
            asked_at TIMESTAMP,
            emotion VARCHAR(45),
            student_id INTEGER REFERENCES students(id)
        )
        "#,
    ),
];

/// Many-to-many association tables
const ASSOCIATIONS: &[(&str, &str)] = &[
    (
        "lesson_students",
        r#"
        CREATE TABLE IF NOT EXISTS lesson_students (
            lesson_id INTEGER NOT NULL REFERENCES lessons(id),
            student_id INTEGER NOT NULL REFERENCES students(id),
            PRIMARY KEY (lesson_id, student_id)
        )
        "#,
    ),
    (
        "exam_students",
        r#"
        CREATE TABLE IF NOT EXISTS exam_students (
            exam_id INTEGER NOT NULL REFERENCES exam_simulations(id),
            student_id INTEGER NOT NULL REFERENCES students(id),
            PRIMARY KEY (exam_id, student_id)
        )
        "#,
    ),
    (
        "achievement_students",
        r#"
        CREATE TABLE IF NOT EXISTS achievement_students (
            achievement_id INTEGER NOT NULL REFERENCES achievements(id),
            student_id INTEGER NOT NULL REFERENCES students(id),
            PRIMARY KEY (achievement_id, student_id)
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_topics_lesson ON topics(lesson_id)",
    "CREATE INDEX IF NOT EXISTS idx_statistics_student ON statistics(student_id)",
    "CREATE INDEX IF NOT EXISTS idx_chatbot_student ON chatbot_interactions(student_id)",
    "CREATE INDEX IF NOT EXISTS idx_lesson_students_student ON lesson_students(student_id)",
    "CREATE INDEX IF NOT EXISTS idx_exam_students_student ON exam_students(student_id)",
    "CREATE INDEX IF NOT EXISTS idx_achievement_students_student ON achievement_students(student_id)",
];

/// Create all tables and indexes.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    for (table, ddl) in TABLES.iter().chain(ASSOCIATIONS) {
        tracing::debug!(table, "ensuring table");
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!("Schema migrations complete");
    Ok(())
}
