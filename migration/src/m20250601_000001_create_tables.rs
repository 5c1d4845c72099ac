use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学段表
        manager
            .create_table(
                Table::create()
                    .table(AcademicLevels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicLevels::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AcademicLevels::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建导师资料表
        manager
            .create_table(
                Table::create()
                    .table(TutorProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TutorProfiles::UserId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TutorProfiles::Headline).string().null())
                    .col(ColumnDef::new(TutorProfiles::Bio).text().null())
                    .col(ColumnDef::new(TutorProfiles::HourlyRate).double().null())
                    .col(
                        ColumnDef::new(TutorProfiles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TutorProfiles::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TutorProfiles::Table, TutorProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建导师开设组合表
        manager
            .create_table(
                Table::create()
                    .table(TutorOfferings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TutorOfferings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TutorOfferings::TutorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TutorOfferings::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TutorOfferings::AcademicLevelId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TutorOfferings::Table, TutorOfferings::TutorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TutorOfferings::Table, TutorOfferings::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TutorOfferings::Table, TutorOfferings::AcademicLevelId)
                            .to(AcademicLevels::Table, AcademicLevels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一导师的（科目，学段）组合唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_tutor_offerings_unique")
                    .table(TutorOfferings::Table)
                    .col(TutorOfferings::TutorId)
                    .col(TutorOfferings::SubjectId)
                    .col(TutorOfferings::AcademicLevelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::TutorId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::AcademicLevelId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(ColumnDef::new(Assignments::DueDate).big_integer().null())
                    .col(ColumnDef::new(Assignments::FileRef).string().null())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::TutorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::IsLate).boolean().not_null())
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(ColumnDef::new(Submissions::Grade).double().null())
                    .col(ColumnDef::new(Submissions::Feedback).text().null())
                    .col(ColumnDef::new(Submissions::FileRef).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 一个学生对一个作业至多一次提交
        manager
            .create_index(
                Index::create()
                    .name("idx_submissions_assignment_student_unique")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建雇佣请求表
        manager
            .create_table(
                Table::create()
                    .table(HireRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HireRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HireRequests::TutorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HireRequests::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HireRequests::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HireRequests::AcademicLevelId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HireRequests::Status).string().not_null())
                    .col(ColumnDef::new(HireRequests::Notes).text().null())
                    .col(ColumnDef::new(HireRequests::PaymentType).string().null())
                    .col(
                        ColumnDef::new(HireRequests::RequestedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HireRequests::RespondedAt)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(HireRequests::Table, HireRequests::TutorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(HireRequests::Table, HireRequests::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 按导师查询请求列表和统计
        manager
            .create_index(
                Index::create()
                    .name("idx_hire_requests_tutor_status")
                    .table(HireRequests::Table)
                    .col(HireRequests::TutorId)
                    .col(HireRequests::Status)
                    .to_owned(),
            )
            .await?;

        // 创建导师评价表
        manager
            .create_table(
                Table::create()
                    .table(TutorReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TutorReviews::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TutorReviews::TutorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TutorReviews::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TutorReviews::Rating).integer().not_null())
                    .col(ColumnDef::new(TutorReviews::ReviewText).text().not_null())
                    .col(
                        ColumnDef::new(TutorReviews::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TutorReviews::Table, TutorReviews::TutorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TutorReviews::Table, TutorReviews::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个 (student, tutor) 组合至多一条评价
        manager
            .create_index(
                Index::create()
                    .name("idx_tutor_reviews_student_tutor_unique")
                    .table(TutorReviews::Table)
                    .col(TutorReviews::TutorId)
                    .col(TutorReviews::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TutorReviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HireRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TutorOfferings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TutorProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicLevels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    AvatarUrl,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum AcademicLevels {
    #[sea_orm(iden = "academic_levels")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum TutorProfiles {
    #[sea_orm(iden = "tutor_profiles")]
    Table,
    UserId,
    Headline,
    Bio,
    HourlyRate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TutorOfferings {
    #[sea_orm(iden = "tutor_offerings")]
    Table,
    Id,
    TutorId,
    SubjectId,
    AcademicLevelId,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    TutorId,
    StudentId,
    SubjectId,
    AcademicLevelId,
    Title,
    Description,
    DueDate,
    FileRef,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    AssignmentId,
    StudentId,
    SubmittedAt,
    IsLate,
    Status,
    Grade,
    Feedback,
    FileRef,
}

#[derive(DeriveIden)]
enum HireRequests {
    #[sea_orm(iden = "hire_requests")]
    Table,
    Id,
    TutorId,
    StudentId,
    SubjectId,
    AcademicLevelId,
    Status,
    Notes,
    PaymentType,
    RequestedAt,
    RespondedAt,
}

#[derive(DeriveIden)]
enum TutorReviews {
    #[sea_orm(iden = "tutor_reviews")]
    Table,
    Id,
    TutorId,
    StudentId,
    Rating,
    ReviewText,
    CreatedAt,
}
